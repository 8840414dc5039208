//! # auth-client
//!
//! Leptos + WASM client core for session handling: the persisted session
//! token, route guards for protected views, and a reusable form engine with
//! validation and single-flight async submission.
//!
//! Everything under `state` and `util::errors` runs natively so it can be
//! unit-tested without a browser; browser glue is gated on `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
