//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::preference_store::LocalStorageStore;

/// Navbar button flipping the theme. The icon and `aria-pressed` are
/// projections of the shared `ThemeState`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_click = move |_| {
        theme.update(|t| {
            t.toggle(&LocalStorageStore);
        });
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            aria-label="Toggle theme"
            aria-pressed=move || theme.get().theme.aria_pressed()
            on:click=on_click
        >
            <i id="themeIcon" class=move || format!("fas {}", theme.get().theme.icon_class())></i>
        </button>
    }
}
