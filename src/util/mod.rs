//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the state machines stay testable without a browser.

pub mod document;
pub mod integrations;
pub mod one_shot;
pub mod preference_store;
pub mod scroll;
pub mod validate;
