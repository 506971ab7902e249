//! # theme-toggle
//!
//! Leptos + WASM client for a persistent dark mode toggle.
//!
//! Reads the user's preference from `localStorage` on page load, marks the
//! document body with a `dark-mode` class when it is set, and renders a
//! single floating control that flips both the class and the stored value.
//! All browser access lives behind the `hydrate` feature so the state and
//! persistence logic stays natively testable.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Client-side entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
