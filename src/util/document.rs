//! Document-level projections: `<html>` theme classes, body scroll lock,
//! section geometry and user alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! These nodes sit outside the Leptos view tree, so effects in `app` write
//! them through here. Every helper is a no-op when the node is missing or
//! when running outside the browser.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

#[cfg(feature = "csr")]
use crate::error::window;
use crate::state::nav::SectionGeometry;
use crate::state::theme::Theme;

/// Swap the `theme-light` / `theme-dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = browser::apply_theme(theme) {
            leptos::logging::warn!("theme class update failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Lock or restore page scrolling through `body.style.overflow`.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = browser::set_scroll_locked(locked) {
            leptos::logging::warn!("scroll lock update failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Geometry of every `section[id]` in document order.
pub fn section_geometry() -> Vec<SectionGeometry> {
    #[cfg(feature = "csr")]
    {
        browser::section_geometry().unwrap_or_else(|e| {
            leptos::logging::warn!("section lookup failed: {e}");
            Vec::new()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Blocking user notice for placeholder actions.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = window().and_then(|w| Ok(w.alert_with_message(message)?)) {
            leptos::logging::warn!("alert failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Current layout viewport width, `None` outside the browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        window().ok()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast;

    use crate::error::{DomError, document};
    use crate::state::nav::SectionGeometry;
    use crate::state::theme::Theme;

    pub(super) fn apply_theme(theme: Theme) -> Result<(), DomError> {
        let Some(root) = document()?.document_element() else {
            return Ok(());
        };
        let class_list = root.class_list();
        class_list.remove_1(theme.toggled().document_class())?;
        class_list.add_1(theme.document_class())?;
        Ok(())
    }

    pub(super) fn set_scroll_locked(locked: bool) -> Result<(), DomError> {
        let Some(body) = document()?.body() else {
            return Ok(());
        };
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }

    pub(super) fn section_geometry() -> Result<Vec<SectionGeometry>, DomError> {
        let nodes = document()?.query_selector_all("section[id]")?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionGeometry::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect())
    }
}
