//! Fire-once subscriptions.
//!
//! `OneShot` is the watcher-agnostic core: a predicate decides whether an
//! observation qualifies, and the action runs for the first qualifying one
//! only. `observe_once` binds it to `IntersectionObserver`, unobserving each
//! target as soon as its action has run.

#[cfg(test)]
#[path = "one_shot_test.rs"]
mod one_shot_test;

/// Subscription that runs its action at most once.
pub struct OneShot<T> {
    predicate: Box<dyn Fn(&T) -> bool>,
    action: Option<Box<dyn FnOnce(T)>>,
}

impl<T> OneShot<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + 'static, action: impl FnOnce(T) + 'static) -> Self {
        Self { predicate: Box::new(predicate), action: Some(Box::new(action)) }
    }

    /// Offer one observation. Returns `true` only on the call that fired.
    pub fn offer(&mut self, value: T) -> bool {
        if self.action.is_none() || !(self.predicate)(&value) {
            return false;
        }
        match self.action.take() {
            Some(action) => {
                action(value);
                true
            }
            None => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.action.is_none()
    }
}

/// Observer options for `observe_once`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObserveOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
}

#[cfg(feature = "csr")]
pub use browser::observe_once;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{ObserveOptions, OneShot};
    use crate::error::DomError;

    /// Run `action` once for `element` when it first intersects the viewport,
    /// then stop observing it.
    ///
    /// The observer callback is leaked; it lives as long as the page.
    pub fn observe_once(
        element: &Element,
        options: &ObserveOptions,
        action: impl FnOnce(Element) + 'static,
    ) -> Result<(), DomError> {
        let shot = Rc::new(RefCell::new(OneShot::new(
            |entry: &IntersectionObserverEntry| entry.is_intersecting(),
            move |entry: IntersectionObserverEntry| action(entry.target()),
        )));

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if shot.borrow_mut().offer(entry) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        }
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        callback.forget();
        Ok(())
    }
}
