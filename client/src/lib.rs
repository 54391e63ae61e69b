//! # client
//!
//! Leptos + WASM frontend for the chat sign-in flow.
//!
//! This crate contains the auth pages, their state containers, the REST
//! client for the external user API, and the browser ports (storage,
//! notifications) the pages call through. The root `chat-auth` binary
//! renders it on the server; the `hydrate` entry point below takes over in
//! the browser.

pub mod app;
pub mod net;
pub mod pages;
pub mod ports;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
