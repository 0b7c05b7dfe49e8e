//! Utility functions for WASM

use mnee_checkout_lib::CheckoutError;
use wasm_bindgen::prelude::*;

/// Set up better panic messages in the browser console
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    pub fn error(s: &str);
}

/// Convert a message into a JS `Error`
pub fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

/// Convert a checkout error into a JS `Error` carrying `code` and `userFacing`
pub fn checkout_error(err: &CheckoutError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    let _ = js_sys::Reflect::set(
        &js_err,
        &"code".into(),
        &JsValue::from(err.code() as i32),
    );
    let _ = js_sys::Reflect::set(
        &js_err,
        &"userFacing".into(),
        &JsValue::from_bool(err.is_user_facing()),
    );
    js_err.into()
}

/// Best-effort text for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Serialize to a plain JS value (objects, not `Map`s)
pub fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&format!("Serialization failed: {}", e)))
}
