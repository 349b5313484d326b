//! # mpet-client
//!
//! Leptos + WASM front end for the MPet pet adoption platform. Replaces the
//! hand-rolled JavaScript SPA with a Rust-native UI layer talking to the same
//! REST backend.
//!
//! The crate contains pages, components, application state, the REST client,
//! and the access-control core: a persisted session store, a static role →
//! route policy, and the route guard every protected page runs on load.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
