//! # client
//!
//! Leptos + WASM frontend for the HealthSpace social network.
//!
//! This crate contains pages, components, session state, REST service
//! mappers, and form validation. It talks to the HealthSpace REST API over
//! `gloo-net` in the browser; the `healthspace-server` host crate server-renders it
//! through the `ssr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
