//! Theme controller state and the preference-store seam.
//!
//! DESIGN
//! ======
//! `ThemeState` is the single owner of the current theme. The `<html>` class
//! flag, the toggle icon and `aria-pressed` are projections written from it,
//! so nothing reads state back out of presentation attributes.
//!
//! TRADE-OFFS
//! ==========
//! Adopting the system theme at startup does not write the store. Only an
//! explicit `apply` (the toggle button) persists, so system dark-mode changes
//! keep being followed until the user picks a theme by hand. Persisting on
//! every apply would freeze whatever the system said on the first visit.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

/// Visual color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored under the preference key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class set on the document element while this theme is active.
    pub fn document_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Font Awesome icon shown on the toggle. Dark mode offers the sun.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored value was neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Durable storage for the single theme preference plus the system signal.
///
/// Implementations never fail: unavailable storage reads as unset and writes
/// are dropped.
pub trait PreferenceStore {
    fn get(&self) -> Option<Theme>;
    fn set(&self, theme: Theme);
    fn system_prefers_dark(&self) -> bool;
}

/// In-memory store used by tests and as a fallback when no browser is present.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Cell<Option<Theme>>,
    system_dark: Cell<bool>,
}

impl MemoryStore {
    pub fn new(stored: Option<Theme>, system_dark: bool) -> Self {
        Self { stored: Cell::new(stored), system_dark: Cell::new(system_dark) }
    }

    pub fn set_system_dark(&self, dark: bool) {
        self.system_dark.set(dark);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<Theme> {
        self.stored.get()
    }

    fn set(&self, theme: Theme) {
        self.stored.set(Some(theme));
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark.get()
    }
}

/// Where the current theme came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// Following the OS/browser signal; nothing stored.
    #[default]
    System,
    /// Chosen by the user, or restored from an earlier choice.
    Explicit,
}

/// Current theme and its provenance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub source: ThemeSource,
}

impl ThemeState {
    /// Startup decision: a stored choice wins, otherwise the system signal.
    pub fn initialize(store: &impl PreferenceStore) -> Self {
        match store.get() {
            Some(theme) => Self { theme, source: ThemeSource::Explicit },
            None => Self {
                theme: Theme::from_dark(store.system_prefers_dark()),
                source: ThemeSource::System,
            },
        }
    }

    /// Explicitly select `theme` and persist it. Idempotent.
    pub fn apply(&mut self, theme: Theme, store: &impl PreferenceStore) {
        self.theme = theme;
        self.source = ThemeSource::Explicit;
        store.set(theme);
    }

    /// Flip the current theme and persist the result.
    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Theme {
        let next = self.theme.toggled();
        self.apply(next, store);
        next
    }

    /// React to an OS dark-mode change.
    ///
    /// Ignored once the user has chosen, even if storage dropped the write,
    /// and whenever a preference is stored. Returns whether the visible theme
    /// changed.
    pub fn on_system_change(&mut self, prefers_dark: bool, store: &impl PreferenceStore) -> bool {
        if self.source == ThemeSource::Explicit || store.get().is_some() {
            return false;
        }
        let next = Theme::from_dark(prefers_dark);
        let changed = next != self.theme;
        self.theme = next;
        self.source = ThemeSource::System;
        changed
    }
}
