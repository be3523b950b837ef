use super::*;

fn page() -> Vec<SectionGeometry> {
    vec![
        SectionGeometry::new("home", 0.0, 700.0),
        SectionGeometry::new("about", 700.0, 600.0),
        SectionGeometry::new("skills", 1300.0, 500.0),
        SectionGeometry::new("projects", 1800.0, 900.0),
        SectionGeometry::new("contact", 2700.0, 800.0),
    ]
}

// =============================================================
// HeaderState
// =============================================================

#[test]
fn header_switches_strictly_above_threshold() {
    assert_eq!(HeaderState::from_offset(0.0), HeaderState::AtTop);
    assert_eq!(HeaderState::from_offset(50.0), HeaderState::AtTop);
    assert_eq!(HeaderState::from_offset(50.5), HeaderState::Scrolled);
    assert_eq!(HeaderState::from_offset(4000.0), HeaderState::Scrolled);
}

// =============================================================
// Section geometry
// =============================================================

#[test]
fn section_window_is_half_open_and_shifted() {
    let about = SectionGeometry::new("about", 700.0, 600.0);
    assert!(!about.contains(599.0));
    assert!(about.contains(600.0));
    assert!(about.contains(1199.0));
    assert!(!about.contains(1200.0));
}

#[test]
fn active_section_tracks_offset() {
    let sections = page();
    assert_eq!(active_section(0.0, &sections), Some("home"));
    assert_eq!(active_section(650.0, &sections), Some("about"));
    assert_eq!(active_section(1750.0, &sections), Some("projects"));
    assert_eq!(active_section(9000.0, &sections), None);
}

#[test]
fn overlapping_sections_last_match_wins() {
    let sections = vec![
        SectionGeometry::new("outer", 100.0, 1000.0),
        SectionGeometry::new("inner", 300.0, 200.0),
    ];
    assert_eq!(active_section(250.0, &sections), Some("inner"));
    assert_eq!(active_section(500.0, &sections), Some("outer"));
}

#[test]
fn link_targets_compares_fragment() {
    assert!(link_targets("#about", "about"));
    assert!(!link_targets("about", "about"));
    assert!(!link_targets("#about-me", "about"));
    assert!(!link_targets("#", "about"));
}

// =============================================================
// NavState
// =============================================================

#[test]
fn on_scroll_updates_header_and_active_link() {
    let mut nav = NavState::default();
    nav.on_scroll(1300.0, &page());
    assert_eq!(nav.header, HeaderState::Scrolled);
    assert_eq!(nav.active_section.as_deref(), Some("skills"));
    assert!(nav.is_link_active("#skills"));
    assert!(!nav.is_link_active("#about"));
}

#[test]
fn on_scroll_keeps_previous_highlight_without_match() {
    let mut nav = NavState::default();
    nav.on_scroll(2800.0, &page());
    nav.on_scroll(9000.0, &page());
    assert_eq!(nav.active_section.as_deref(), Some("contact"));
}

#[test]
fn menu_toggle_and_close() {
    let mut nav = NavState::default();
    assert!(!nav.menu.is_open());
    nav.toggle_menu();
    assert!(nav.menu.is_open());
    nav.toggle_menu();
    assert!(!nav.menu.is_open());
    nav.toggle_menu();
    nav.close_menu();
    assert_eq!(nav.menu, MenuState::Closed);
}
