use super::*;

#[test]
fn config_error_carries_cause() {
    let err = DomError::Config("key must be a string".to_owned());
    assert_eq!(err.to_string(), "config serialization failed: key must be a string");
}

#[test]
fn js_error_carries_message() {
    let err = DomError::Js("QuotaExceededError".to_owned());
    assert_eq!(err.to_string(), "javascript error: QuotaExceededError");
}

#[test]
fn window_and_document_errors_are_distinct() {
    assert_ne!(DomError::NoWindow, DomError::NoDocument);
}
