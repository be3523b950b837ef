pub mod contact_form;
pub mod hero;
pub mod lazy_image;
pub mod navbar;
pub mod project_card;
pub mod project_modal;
pub mod skill_bar;
pub mod theme_toggle;
