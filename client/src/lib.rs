//! # client
//!
//! Leptos + WASM frontend for the job board: the job listing cards and the
//! login/signup form, plus the small amount of routing and session glue the
//! two need.
//!
//! Everything outside `#[cfg(feature = "hydrate")]` blocks is plain Rust and
//! unit-tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
