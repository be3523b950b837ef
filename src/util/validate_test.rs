use super::*;

// =============================================================
// Name
// =============================================================

#[test]
fn name_required_and_min_length() {
    assert_eq!(validate_name(""), "Name is required");
    assert_eq!(validate_name("   "), "Name is required");
    assert_eq!(validate_name(" J "), "Name must be at least 2 characters");
    assert_eq!(validate_name("Jo"), "");
    assert_eq!(validate_name("  Jo  "), "");
}

#[test]
fn name_counts_characters_not_bytes() {
    assert_eq!(validate_name("é"), "Name must be at least 2 characters");
    assert_eq!(validate_name("李明"), "");
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_required() {
    assert_eq!(validate_email(""), "Email is required");
    assert_eq!(validate_email("  "), "Email is required");
}

#[test]
fn email_accepts_simple_addresses() {
    assert_eq!(validate_email("a@b.co"), "");
    assert_eq!(validate_email("first.last@mail.example.org"), "");
}

#[test]
fn email_rejects_malformed_addresses() {
    let invalid = "Please enter a valid email address";
    assert_eq!(validate_email("ab.co"), invalid);
    assert_eq!(validate_email("a@bco"), invalid);
    assert_eq!(validate_email("a@@b.co"), invalid);
    assert_eq!(validate_email("a b@c.de"), invalid);
    assert_eq!(validate_email(" a@b.co"), invalid);
    assert_eq!(validate_email("a@b."), invalid);
}

// =============================================================
// Subject / Message
// =============================================================

#[test]
fn subject_required_and_min_length() {
    assert_eq!(validate_subject(""), "Subject is required");
    assert_eq!(validate_subject("Hi"), "Subject must be at least 3 characters");
    assert_eq!(validate_subject("Hi there"), "");
}

#[test]
fn message_required_and_min_length() {
    assert_eq!(validate_message("\n\t"), "Message is required");
    assert_eq!(validate_message("123456789"), "Message must be at least 10 characters");
    assert_eq!(validate_message("1234567890"), "");
    assert_eq!(validate_message("   123456789   "), "Message must be at least 10 characters");
}
