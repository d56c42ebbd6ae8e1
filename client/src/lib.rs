//! # client
//!
//! Leptos + WASM frontend for the budget-allocation upload desk.
//!
//! The page is rendered on the server and hydrated in the browser. Once
//! hydrated, the upload form guards file selection and submission, and the
//! format-guidelines panel can be expanded and collapsed.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod upload;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
