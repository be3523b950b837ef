//! # portfolio
//!
//! Leptos + WASM client for a single-page personal portfolio.
//!
//! This crate contains the page, its interactive components, the state
//! machines behind them (theme, navigation, contact form, project modal) and
//! the browser glue for storage, media queries, intersection observers and
//! optional third-party animation libraries.
//!
//! Everything outside the `csr` feature compiles natively so the state
//! machines and validators run under plain `cargo test`.

pub mod app;
pub mod catalog;
pub mod components;
pub mod consts;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mounts the app and starts optional integrations.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    leptos::mount::mount_to_body(app::App);

    // Third-party hooks look up DOM nodes rendered above.
    util::integrations::initialize_all();
    leptos::logging::log!("Portfolio initialized successfully!");
}
