use super::*;

#[test]
fn anchor_fragment_strips_hash() {
    assert_eq!(anchor_fragment("#contact"), Some("contact"));
    assert_eq!(anchor_fragment("#a"), Some("a"));
}

#[test]
fn anchor_fragment_ignores_bare_hash_and_external_links() {
    assert_eq!(anchor_fragment("#"), None);
    assert_eq!(anchor_fragment(""), None);
    assert_eq!(anchor_fragment("https://example.com/#about"), None);
    assert_eq!(anchor_fragment("/about"), None);
}

#[test]
fn scroll_destination_clears_header() {
    assert_eq!(scroll_destination(1000.0), 920.0);
    assert_eq!(scroll_destination(0.0), -80.0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn scroll_y_is_zero_outside_browser() {
    assert_eq!(scroll_y(), 0.0);
    install_anchor_scrolling();
}
