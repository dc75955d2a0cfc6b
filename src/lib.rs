// lib.rs - Root module for the catalog_portal library
//
// The library is compiled twice by cargo-leptos: once natively for the SSR
// server and once to WASM, where `hydrate` is the entry point.

/// Leptos application, API client, and screen logic
pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
