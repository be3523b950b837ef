//! Navigation chrome state: sticky header, mobile menu, active section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Recomputed on every scroll event from the current offset and the section
//! geometry the browser reports. Nothing here is persisted.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{HEADER_SCROLL_THRESHOLD_PX, SECTION_ACTIVATION_OFFSET_PX};

/// Navbar style driven by scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    AtTop,
    Scrolled,
}

impl HeaderState {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD_PX { Self::Scrolled } else { Self::AtTop }
    }
}

/// Mobile (hamburger) menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Position and size of one `section[id]`, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `scroll_y` falls in `[top - 100, top - 100 + height)`.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section the reader is in. Last match in document order wins.
pub fn active_section(scroll_y: f64, sections: &[SectionGeometry]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

/// Whether a nav link's `href` points at section `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Derived navigation state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub header: HeaderState,
    pub menu: MenuState,
    /// Section whose link carries the `active` marker.
    pub active_section: Option<String>,
}

impl NavState {
    /// Re-evaluate header style and active section for a scroll position.
    ///
    /// When no section contains the offset the previous highlight stays.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionGeometry]) {
        self.header = HeaderState::from_offset(scroll_y);
        if let Some(id) = active_section(scroll_y, sections) {
            if self.active_section.as_deref() != Some(id) {
                self.active_section = Some(id.to_owned());
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    /// Any nav-link activation closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        self.active_section
            .as_deref()
            .is_some_and(|id| link_targets(href, id))
    }
}
