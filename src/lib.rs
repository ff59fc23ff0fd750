//! # houser
//!
//! Leptos + WASM front-end for the Houser real-estate classifieds site.
//!
//! This crate contains pages, route guards, session state, REST types, and
//! the client-side branding layer. All domain logic lives behind the backend
//! API; this crate decides what to render and where to navigate.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
