//! # client
//!
//! Leptos + WASM frontend for the FitCoach Pro site.
//!
//! This crate contains the pages, shared components, application state, and
//! the browser side of authentication: Web Storage backends and a signal
//! renderer plugged into `fitcoach`'s session synchronizer. The server crate
//! renders it with the `ssr` feature; the browser hydrates it with `hydrate`.

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
