//! # support-plan
//!
//! Leptos + WASM frontend for an educational accommodation/IEP-style
//! support plan document. Renders two form-like views: the "Additional
//! Information" questionnaire grid and the interactive "Support Rubric".
//!
//! This crate contains pages, components, application state, static
//! form/rubric data, and browser utility helpers. Form state is ephemeral
//! per page load; only the dark-mode preference is persisted.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point for hydration after SSR.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
