#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod services;

mod app;

use wasm_bindgen::prelude::*;

/// Level for the browser console logger.
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Route `log` macros to the browser console. Safe to call more than once.
pub fn init_logging() {
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Console logger not installed: {}", e).into());
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    log::info!("MedEventGen frontend v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(loader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app-loading"))
    {
        loader.remove();
    }

    leptos::mount::mount_to_body(app::App);
}
