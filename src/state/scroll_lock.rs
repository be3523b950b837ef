//! Page scroll lock shared by the mobile menu and the project modal.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use crate::state::modal::ModalState;
use crate::state::nav::NavState;

/// Body scrolling stays locked while either surface is open.
pub fn scroll_locked(nav: &NavState, modal: ModalState) -> bool {
    nav.menu.is_open() || modal.is_open()
}
