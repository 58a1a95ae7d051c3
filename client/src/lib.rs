//! # client
//!
//! Leptos + WASM frontend for the estate listing application.
//!
//! This crate contains the login, registration and seller dashboard screens,
//! the form state they drive, and the REST client for the external estate
//! API. Browser-only behavior (HTTP, `localStorage`) sits behind the
//! `hydrate` feature so the workflows and validation run natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
