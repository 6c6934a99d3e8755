//! TaxClaw marketing site: page composition crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes compose shared chrome and structural primitives over static,
//! authored content. The server crate renders every route via SSR; in the
//! browser this crate hydrates the FAQ disclosure widgets, the only
//! interactive surface on the site.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
