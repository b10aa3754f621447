//! # client
//!
//! Leptos + WASM frontend for the HireBridge sign-in / sign-up flow.
//!
//! This crate contains the combined auth screen, the session and screen state
//! behind it, the post-submit routing decision, and the destination screens it
//! hands off to. The `hirebridge` server renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
