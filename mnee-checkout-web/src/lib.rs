#![cfg(target_arch = "wasm32")]
//! MNEE Checkout Web - WebAssembly bindings
//!
//! This crate exposes the checkout user info store, theme watcher and wallet
//! connection controller to JavaScript, backed by `localStorage` and
//! `matchMedia`.

use wasm_bindgen::prelude::*;

mod logging;
mod storage;
mod theme;
mod user_info;
mod utils;
mod wallet;

pub use storage::LocalStorageSlot;
pub use theme::{MediaQueryAppearance, WasmThemeWatcher};
pub use user_info::WasmUserInfoStore;
pub use wallet::{JsWalletConnector, JsWalletEvents, WasmWalletConnection};

/// Initialize the WASM module
///
/// Runs once when the module is loaded: installs the panic hook and routes
/// `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
    logging::init();
    utils::log("MNEE checkout WASM module initialized");
}

/// Raise console logging to debug level
#[wasm_bindgen(js_name = enableDebugLogging)]
pub fn enable_debug_logging() {
    logging::set_debug(true);
}

/// Get the version of the checkout WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
