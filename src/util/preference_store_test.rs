#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_store_reads_unset_outside_browser() {
    assert_eq!(LocalStorageStore.get(), None);
}

#[test]
fn local_store_set_is_noop_but_callable() {
    LocalStorageStore.set(Theme::Dark);
    assert_eq!(LocalStorageStore.get(), None);
}

#[test]
fn media_signals_are_false_outside_browser() {
    assert!(!LocalStorageStore.system_prefers_dark());
    assert!(!prefers_reduced_motion());
    assert!(!media_matches("(min-width: 0px)"));
}

#[test]
fn watch_system_dark_never_fires_outside_browser() {
    watch_system_dark(|_| panic!("no browser signal expected"));
}
