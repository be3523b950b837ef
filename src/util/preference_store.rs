//! Browser-backed theme preference store and media-query signals.
//!
//! Reads and writes the `theme` key in `localStorage` and evaluates
//! `matchMedia` queries. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: unavailable storage (private mode, disabled
//! cookies) reads as "unset" and writes are dropped. Non-browser builds no-op
//! so the state machines stay testable natively.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

#[cfg(feature = "csr")]
use crate::consts::THEME_STORAGE_KEY;
use crate::consts::{DARK_SCHEME_QUERY, REDUCED_MOTION_QUERY};
use crate::state::theme::{PreferenceStore, Theme};

/// `localStorage` implementation of [`PreferenceStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    crate::error::window().ok()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<Theme> {
        #[cfg(feature = "csr")]
        {
            let raw = storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
            raw.parse().ok()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }

    fn system_prefers_dark(&self) -> bool {
        media_matches(DARK_SCHEME_QUERY)
    }
}

#[cfg(feature = "csr")]
fn media_query(query: &str) -> Option<web_sys::MediaQueryList> {
    crate::error::window().ok()?.match_media(query).ok().flatten()
}

/// Evaluate a media query, `false` when it cannot be evaluated.
pub fn media_matches(query: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        media_query(query).map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        false
    }
}

pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

/// Call `on_change` with the new dark-mode flag whenever the OS signal flips.
///
/// The listener is registered for the life of the page.
pub fn watch_system_dark(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = media_query(DARK_SCHEME_QUERY) else {
            return;
        };
        let mq_for_cb = mq.clone();
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            on_change(mq_for_cb.matches());
        });
        if let Err(e) = mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
            leptos::logging::warn!("color-scheme listener failed: {}", crate::error::DomError::from(e));
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
