//! Errors raised by browser glue.
//!
//! None of these are fatal. Event handlers log them and carry on, because
//! every element the page touches may be missing in some layout.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while talking to the DOM or a browser API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// `window` is not available (non-browser host).
    #[error("window unavailable")]
    NoWindow,

    /// `window.document` is not available.
    #[error("document unavailable")]
    NoDocument,

    /// An options object could not be serialized for a JS library.
    #[error("config serialization failed: {0}")]
    Config(String),

    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| "unknown".to_owned());
        Self::Js(text)
    }
}

#[cfg(feature = "csr")]
pub(crate) fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(feature = "csr")]
pub(crate) fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}
