//! Deferred-load images and the profile photo with a placeholder fallback.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

use leptos::prelude::*;

use crate::consts::PROFILE_PLACEHOLDER_SRC;

/// `(src, data-src)` attribute pair for a deferred image.
pub fn lazy_sources(src: &'static str, loaded: bool) -> (Option<&'static str>, Option<&'static str>) {
    if loaded { (Some(src), None) } else { (None, Some(src)) }
}

/// Image whose source stays in `data-src` until it first scrolls into view.
#[component]
pub fn LazyImage(src: &'static str, alt: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let img_ref = NodeRef::<leptos::html::Img>::new();
    let loaded = RwSignal::new(false);

    #[cfg(feature = "csr")]
    Effect::new(move || {
        use crate::util::one_shot::{ObserveOptions, observe_once};

        let Some(img) = img_ref.get() else {
            return;
        };
        if let Err(e) = observe_once(&img, &ObserveOptions::default(), move |_| {
            let _ = loaded.try_set(true);
        }) {
            leptos::logging::warn!("lazy image observer failed: {e}");
            loaded.set(true);
        }
    });

    view! {
        <img
            node_ref=img_ref
            class=class
            alt=alt
            src=move || lazy_sources(src, loaded.get()).0
            data-src=move || lazy_sources(src, loaded.get()).1
        />
    }
}

/// Source to show for the profile photo.
pub fn profile_source(src: &'static str, failed: bool) -> &'static str {
    if failed { PROFILE_PLACEHOLDER_SRC } else { src }
}

/// Profile photo. A load error swaps in an inline initials placeholder once;
/// a failing placeholder is not retried.
#[component]
pub fn ProfileImage(src: &'static str, alt: &'static str) -> impl IntoView {
    let failed = RwSignal::new(false);

    let on_error = move |_| {
        if !failed.get_untracked() {
            failed.set(true);
        }
    };

    view! {
        <img
            id="profileImage"
            class="profile-image"
            alt=alt
            src=move || profile_source(src, failed.get())
            on:error=on_error
        />
    }
}
