//! # client
//!
//! Leptos + WASM frontend for the kanban board.
//!
//! This crate contains the board page, its column and card components, the
//! `gloo-net` implementation of the card store API, and the signal-backed
//! state handle that lets `kanban::BoardController` drive the UI.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
