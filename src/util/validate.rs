//! Contact-form field validators.
//!
//! Each validator takes the raw field value and returns an empty string when
//! the value is acceptable, or the message to show under the field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

fn check_required_min(value: &str, min_chars: usize, required: &str, too_short: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return required.to_owned();
    }
    if trimmed.chars().count() < min_chars {
        return too_short.to_owned();
    }
    String::new()
}

pub fn validate_name(value: &str) -> String {
    check_required_min(value, 2, "Name is required", "Name must be at least 2 characters")
}

/// The pattern runs on the untrimmed value, so surrounding spaces fail.
pub fn validate_email(value: &str) -> String {
    if value.trim().is_empty() {
        return "Email is required".to_owned();
    }
    if !EMAIL_PATTERN.is_match(value) {
        return "Please enter a valid email address".to_owned();
    }
    String::new()
}

pub fn validate_subject(value: &str) -> String {
    check_required_min(value, 3, "Subject is required", "Subject must be at least 3 characters")
}

pub fn validate_message(value: &str) -> String {
    check_required_min(value, 10, "Message is required", "Message must be at least 10 characters")
}
