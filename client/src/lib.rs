//! # client
//!
//! Leptos + WASM frontend for the PeakStart construction site: the public
//! marketing pages and the admin back-office.
//!
//! This crate contains pages, components, application state, and the browser
//! transport that plugs the shared `content` gateway into `gloo-net`. The
//! `ssr` build renders the same components on the server; the `hydrate`
//! build takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
