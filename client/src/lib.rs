//! # client
//!
//! Leptos frontend for the portfolio site, compiled twice: with `ssr` into
//! the server binary for HTML rendering, and with `hydrate` into WASM for the
//! browser. Pages read the static `content` crate directly; the dot-grid
//! background drives the `canvas` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
