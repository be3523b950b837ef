//! Project-detail modal lifecycle.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::catalog::{self, ProjectId, ProjectRecord};

/// Single modal instance: closed, or showing one catalog entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Record currently rendered in the modal body.
    pub fn project(self) -> Option<&'static ProjectRecord> {
        match self {
            Self::Open(id) => catalog::find(id),
            Self::Closed => None,
        }
    }

    /// Show project `id`, replacing any open project. Unknown ids leave the
    /// state untouched. Returns whether the modal is now showing `id`.
    pub fn open(&mut self, id: ProjectId) -> bool {
        if catalog::find(id).is_none() {
            return false;
        }
        *self = Self::Open(id);
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Escape closes an open modal. Returns whether anything changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Clicks close the modal only when they land on the backdrop itself,
    /// not on the dialog or its descendants.
    pub fn on_backdrop_click(&mut self, target_is_root: bool) -> bool {
        if target_is_root && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}
