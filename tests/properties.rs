#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use portfolio::state::theme::{MemoryStore, PreferenceStore, Theme, ThemeState};
use portfolio::util::one_shot::OneShot;
use portfolio::util::validate::{validate_email, validate_name};
use proptest::prelude::*;

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

proptest! {
    #[test]
    fn apply_persists_and_projects(theme in theme_strategy(), stored in proptest::option::of(theme_strategy()), system_dark in any::<bool>()) {
        let store = MemoryStore::new(stored, system_dark);
        let mut state = ThemeState::initialize(&store);
        state.apply(theme, &store);

        prop_assert_eq!(store.get(), Some(theme));
        prop_assert_eq!(state.theme, theme);
        prop_assert_eq!(state.theme.aria_pressed() == "true", theme == Theme::Dark);
    }

    #[test]
    fn toggle_twice_restores_theme(stored in proptest::option::of(theme_strategy()), system_dark in any::<bool>()) {
        let store = MemoryStore::new(stored, system_dark);
        let mut state = ThemeState::initialize(&store);
        let before = state.theme;

        state.toggle(&store);
        prop_assert_ne!(state.theme, before);
        state.toggle(&store);
        prop_assert_eq!(state.theme, before);
    }

    #[test]
    fn short_names_rejected(name in "[ a-zA-Z]{0,6}") {
        let accepted = validate_name(&name).is_empty();
        prop_assert_eq!(accepted, name.trim().chars().count() >= 2);
    }

    #[test]
    fn well_formed_emails_accepted(email in "[a-z0-9._-]{1,8}@[a-z0-9-]{1,8}\\.[a-z]{2,4}") {
        prop_assert_eq!(validate_email(&email), "");
    }

    #[test]
    fn emails_without_at_rejected(email in "[a-z0-9.]{1,16}") {
        prop_assert_ne!(validate_email(&email), "");
    }

    #[test]
    fn emails_without_domain_dot_rejected(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
        prop_assert_ne!(validate_email(&format!("{local}@{domain}")), "");
    }

    #[test]
    fn one_shot_fires_at_most_once(observations in proptest::collection::vec(any::<bool>(), 0..32)) {
        let runs = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&runs);
        let mut trigger = OneShot::new(|visible: &bool| *visible, move |_| counter.set(counter.get() + 1));

        for visible in &observations {
            trigger.offer(*visible);
        }

        let expected = u32::from(observations.contains(&true));
        prop_assert_eq!(runs.get(), expected);
        prop_assert_eq!(trigger.has_fired(), expected == 1);
    }
}
