#![cfg(target_arch = "wasm32")]
//! Theme watcher tests
//!
//! Headless browsers report a light color scheme unless told otherwise, so
//! `auto` assertions only check that a concrete theme is resolved.

use mnee_checkout_web::WasmThemeWatcher;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_defaults_to_light() {
    let watcher = WasmThemeWatcher::new(None).unwrap();
    assert_eq!(watcher.preference(), "light");
    assert_eq!(watcher.theme(), "light");
}

#[wasm_bindgen_test]
fn test_explicit_preference() {
    let watcher = WasmThemeWatcher::new(Some("dark".to_string())).unwrap();
    assert_eq!(watcher.theme(), "dark");
}

#[wasm_bindgen_test]
fn test_auto_resolves_concrete_theme() {
    let watcher = WasmThemeWatcher::new(Some("auto".to_string())).unwrap();
    assert_eq!(watcher.preference(), "auto");
    assert!(matches!(watcher.theme().as_str(), "light" | "dark"));
}

#[wasm_bindgen_test]
fn test_set_preference() {
    let mut watcher = WasmThemeWatcher::new(Some("auto".to_string())).unwrap();

    watcher.set_preference("dark".to_string()).unwrap();
    assert_eq!(watcher.theme(), "dark");

    watcher.set_preference("light".to_string()).unwrap();
    assert_eq!(watcher.theme(), "light");
}

#[wasm_bindgen_test]
fn test_unknown_preference_rejected() {
    let err = WasmThemeWatcher::new(Some("sepia".to_string())).err().unwrap();
    let code = js_sys::Reflect::get(&err, &"code".into()).unwrap();
    assert_eq!(code.as_f64(), Some(2000.0));

    let mut watcher = WasmThemeWatcher::new(None).unwrap();
    assert!(watcher.set_preference("sepia".to_string()).is_err());
    assert_eq!(watcher.preference(), "light");
}
