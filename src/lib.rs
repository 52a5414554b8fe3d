mod app;
mod auth;
mod components;
pub mod config;
mod diaries;
pub mod error;
pub mod modal;
mod models;
mod pages;
mod prompts;
mod state;
mod storage;
pub mod telemetry;
mod util;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::EnvConfig::from_window();
    if let Err(e) = telemetry::init(&config) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!(log_level = %config.log_level, "mood diary starting");

    leptos::mount::mount_to_body(app::App);
}
