//! Smooth scrolling for in-page anchor links.
//!
//! One delegated click listener on the window covers every `a[href^="#"]`
//! on the page, including links rendered after startup.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::ANCHOR_HEADER_CLEARANCE_PX;

/// Fragment id of an in-page link, `None` for the bare `#` and for
/// non-fragment hrefs.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll destination that leaves room for the fixed header.
pub fn scroll_destination(target_top: f64) -> f64 {
    target_top - ANCHOR_HEADER_CLEARANCE_PX
}

/// Current vertical scroll offset, `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        crate::error::window()
            .and_then(|w| Ok(w.scroll_y()?))
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Install the delegated anchor listener for the life of the page.
pub fn install_anchor_scrolling() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::window_event_listener;

        let handle = window_event_listener(leptos::ev::click, |ev| {
            if let Err(e) = handle_anchor_click(&ev) {
                leptos::logging::warn!("anchor scroll failed: {e}");
            }
        });
        // Page-lifetime listener.
        std::mem::forget(handle);
    }
}

#[cfg(feature = "csr")]
fn handle_anchor_click(ev: &web_sys::MouseEvent) -> Result<(), crate::error::DomError> {
    use wasm_bindgen::JsCast;

    let Some(anchor) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return Ok(());
    };
    let Some(href) = anchor.get_attribute("href") else {
        return Ok(());
    };
    let Some(id) = anchor_fragment(&href) else {
        return Ok(());
    };

    // Unresolvable targets fall through to the browser's own navigation.
    let Some(target) = crate::error::document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return Ok(());
    };
    ev.prevent_default();

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_destination(f64::from(target.offset_top())));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    crate::error::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
