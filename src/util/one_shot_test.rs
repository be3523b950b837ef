use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

#[test]
fn fires_on_first_qualifying_offer_only() {
    let hits = Rc::new(Cell::new(0));
    let hits_in = Rc::clone(&hits);
    let mut shot = OneShot::new(|visible: &bool| *visible, move |_| hits_in.set(hits_in.get() + 1));

    assert!(!shot.offer(false));
    assert!(!shot.has_fired());
    assert!(shot.offer(true));
    assert!(shot.has_fired());
    assert!(!shot.offer(true));
    assert!(!shot.offer(true));
    assert_eq!(hits.get(), 1);
}

#[test]
fn action_receives_triggering_value() {
    let seen = Rc::new(RefCell::new(None));
    let seen_in = Rc::clone(&seen);
    let mut shot = OneShot::new(|ratio: &f64| *ratio >= 0.5, move |ratio| *seen_in.borrow_mut() = Some(ratio));

    shot.offer(0.2);
    shot.offer(0.75);
    shot.offer(1.0);
    assert_eq!(*seen.borrow(), Some(0.75));
}

#[test]
fn skill_bar_does_not_reanimate() {
    let widths = Rc::new(RefCell::new(Vec::new()));
    let widths_in = Rc::clone(&widths);
    let mut bar = OneShot::new(|intersecting: &bool| *intersecting, move |_| widths_in.borrow_mut().push(90));

    for intersecting in [true, false, true, false, true] {
        bar.offer(intersecting);
    }
    assert_eq!(*widths.borrow(), vec![90]);
}

#[test]
fn observe_options_default_is_plain_viewport() {
    let options = ObserveOptions::default();
    assert_eq!(options.threshold, None);
    assert_eq!(options.root_margin, None);
}
