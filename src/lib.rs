//! # gatehouse
//!
//! Leptos + WASM single-page app with a public area, a login flow, and a
//! token-gated admin area. Pages read shared state from context; the core
//! stores (session, preferences, query cache, login flow) are plain Rust and
//! run natively under `cargo test`.
//!
//! Browser bindings sit behind the `csr` feature; without it the storage,
//! theme, and navigation adapters fall back to inert implementations.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;
pub mod util;
pub mod validation;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    match console_log::init_with_level(config.log_level) {
        Ok(()) => log::info!("logging at {}", config.log_level),
        Err(e) => leptos::logging::error!("console logger unavailable: {e}"),
    }
    leptos::mount::mount_to_body(app::App);
}
