use super::*;

/// Store with no backing storage: reads are unset and writes vanish.
struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self) -> Option<Theme> {
        None
    }

    fn set(&self, _theme: Theme) {}

    fn system_prefers_dark(&self) -> bool {
        false
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parses_stored_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_projections_follow_dark_flag() {
    assert_eq!(Theme::Dark.document_class(), "theme-dark");
    assert_eq!(Theme::Light.document_class(), "theme-light");
    assert_eq!(Theme::Dark.icon_class(), "fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fa-moon");
    assert_eq!(Theme::Dark.aria_pressed(), "true");
    assert_eq!(Theme::Light.aria_pressed(), "false");
}

#[test]
fn theme_display_matches_storage_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_prefers_stored_choice_over_system() {
    let store = MemoryStore::new(Some(Theme::Light), true);
    let state = ThemeState::initialize(&store);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.source, ThemeSource::Explicit);
}

#[test]
fn initialize_falls_back_to_system_signal() {
    let store = MemoryStore::new(None, true);
    let state = ThemeState::initialize(&store);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.source, ThemeSource::System);
}

#[test]
fn initialize_does_not_persist_system_theme() {
    let store = MemoryStore::new(None, true);
    let _ = ThemeState::initialize(&store);
    assert_eq!(store.get(), None);
}

// =============================================================
// apply / toggle
// =============================================================

#[test]
fn apply_persists_and_projects_each_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        let store = MemoryStore::default();
        let mut state = ThemeState::initialize(&store);
        state.apply(theme, &store);
        assert_eq!(store.get(), Some(theme));
        assert_eq!(state.theme.document_class(), theme.document_class());
        assert_eq!(state.theme.aria_pressed() == "true", theme == Theme::Dark);
    }
}

#[test]
fn apply_is_idempotent() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    state.apply(Theme::Dark, &store);
    let once = state;
    state.apply(Theme::Dark, &store);
    assert_eq!(state, once);
    assert_eq!(store.get(), Some(Theme::Dark));
}

#[test]
fn toggle_twice_restores_presentation() {
    let store = MemoryStore::new(None, false);
    let mut state = ThemeState::initialize(&store);
    let before = state.theme;
    assert_eq!(state.toggle(&store), Theme::Dark);
    assert_eq!(state.toggle(&store), before);
    assert_eq!(state.theme.document_class(), before.document_class());
}

#[test]
fn toggle_marks_choice_explicit() {
    let store = MemoryStore::new(None, true);
    let mut state = ThemeState::initialize(&store);
    state.toggle(&store);
    assert_eq!(state.source, ThemeSource::Explicit);
    assert_eq!(store.get(), Some(Theme::Light));
}

// =============================================================
// System signal tracking
// =============================================================

#[test]
fn system_change_followed_while_unset() {
    let store = MemoryStore::new(None, false);
    let mut state = ThemeState::initialize(&store);
    store.set_system_dark(true);
    assert!(state.on_system_change(true, &store));
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(store.get(), None);
}

#[test]
fn system_change_ignored_after_explicit_choice() {
    let store = MemoryStore::new(None, false);
    let mut state = ThemeState::initialize(&store);
    state.apply(Theme::Light, &store);
    assert!(!state.on_system_change(true, &store));
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn system_change_to_same_theme_reports_no_change() {
    let store = MemoryStore::new(None, true);
    let mut state = ThemeState::initialize(&store);
    assert!(!state.on_system_change(true, &store));
}

#[test]
fn system_change_ignored_after_choice_when_storage_unavailable() {
    let store = UnavailableStore;
    let mut state = ThemeState::initialize(&store);
    assert_eq!(state.source, ThemeSource::System);

    assert_eq!(state.toggle(&store), Theme::Dark);
    assert_eq!(store.get(), None);

    assert!(!state.on_system_change(false, &store));
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.source, ThemeSource::Explicit);
}

#[test]
fn system_tracking_continues_when_storage_unavailable_and_untouched() {
    let store = UnavailableStore;
    let mut state = ThemeState::initialize(&store);
    assert!(state.on_system_change(true, &store));
    assert_eq!(state.theme, Theme::Dark);
}
