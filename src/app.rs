//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the three page-wide state machines (theme, navigation, project
//! modal) and provides them as context. Document-level projections that live
//! outside the view tree (`<html>` theme class, body scroll lock) are written
//! by effects here, once per state change.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::project_modal::ProjectModal;
use crate::pages::home::HomePage;
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::scroll_lock::scroll_locked;
use crate::state::theme::ThemeState;
use crate::util::document;
use crate::util::preference_store::{LocalStorageStore, watch_system_dark};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::initialize(&LocalStorageStore));
    let nav = RwSignal::new(NavState::default());
    let modal = RwSignal::new(ModalState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(modal);

    Effect::new(move || document::apply_theme(theme.get().theme));

    Effect::new(move || {
        let modal = modal.get();
        let locked = nav.with(|n| scroll_locked(n, modal));
        document::set_scroll_locked(locked);
    });

    watch_system_dark(move |prefers_dark| {
        let _ = theme.try_update(|t| t.on_system_change(prefers_dark, &LocalStorageStore));
    });

    install_window_listeners(nav, modal);
    Effect::new(move || refresh_nav(nav));

    view! {
        <Title text="Portfolio"/>
        <Navbar/>
        <main>
            <HomePage/>
        </main>
        <ProjectModal/>
        <footer class="footer">
            <div class="container">
                <p>"Built with Rust and Leptos."</p>
            </div>
        </footer>
    }
}

/// Re-evaluate header and active link from the live scroll offset.
fn refresh_nav(nav: RwSignal<NavState>) {
    let sections = document::section_geometry();
    let scroll_y = crate::util::scroll::scroll_y();

    let Some(mut next) = nav.try_get_untracked() else {
        return;
    };
    next.on_scroll(scroll_y, &sections);
    if nav.with_untracked(|current| *current != next) {
        nav.set(next);
    }
}

#[cfg(feature = "csr")]
fn install_window_listeners(nav: RwSignal<NavState>, modal: RwSignal<ModalState>) {
    use crate::util::scroll::install_anchor_scrolling;

    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| refresh_nav(nav));
    let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        let _ = modal.try_update(|m| m.on_key(&key));
    });
    // Page-lifetime listeners.
    std::mem::forget(on_scroll);
    std::mem::forget(on_key);

    install_anchor_scrolling();
}

#[cfg(not(feature = "csr"))]
fn install_window_listeners(_nav: RwSignal<NavState>, _modal: RwSignal<ModalState>) {}
