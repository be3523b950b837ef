use super::*;

#[test]
fn bar_width_empty_until_revealed() {
    assert_eq!(bar_width(85, false), "0%");
    assert_eq!(bar_width(85, true), "85%");
}

#[test]
fn bar_width_caps_at_full() {
    assert_eq!(bar_width(120, true), "100%");
}
