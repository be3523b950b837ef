//! Sticky top navigation with mobile menu and active-section links.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavState` is refreshed by the window scroll listener in `app`; this
//! component only projects it. Smooth scrolling for the links is handled by
//! the delegated anchor listener in `util::scroll`.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{HeaderState, NavState};

/// Navigation entries, each pointing at a `section[id]`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let menu_open = move || nav.get().menu.is_open();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || nav.get().header == HeaderState::Scrolled>
            <div class="nav-container">
                <a href="#home" class="nav-logo">"IA"</a>
                <ul id="navMenu" class="nav-menu" class:active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || nav.get().is_link_active(href)
                                        on:click=move |_| nav.update(NavState::close_menu)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle/>
                    <button
                        id="hamburger"
                        class="hamburger"
                        class:active=menu_open
                        type="button"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
