//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`theme`, `nav`, `contact`, `modal`) so each
//! component depends on a small focused model. Browser writes are projections
//! of these values, made from effects in the components.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod scroll_lock;
pub mod theme;
