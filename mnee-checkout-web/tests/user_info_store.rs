#![cfg(target_arch = "wasm32")]
//! User info store tests
//!
//! Exercises the `localStorage` backed store the way the page uses it.

use js_sys::{Object, Reflect};
use mnee_checkout_lib::UserInfo;
use mnee_checkout_web::WasmUserInfoStore;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
}

/// A fresh store under its own key so tests don't see each other's data.
fn store(key: &str) -> WasmUserInfoStore {
    local_storage().remove_item(key).unwrap();
    WasmUserInfoStore::new(Some(config(key))).unwrap()
}

fn config(key: &str) -> JsValue {
    let config = Object::new();
    Reflect::set(&config, &"storageKey".into(), &key.into()).unwrap();
    config.into()
}

fn object(fields: &[(&str, &str)]) -> JsValue {
    let obj = Object::new();
    for (name, value) in fields {
        Reflect::set(&obj, &(*name).into(), &(*value).into()).unwrap();
    }
    obj.into()
}

fn user_info(store: &WasmUserInfoStore) -> UserInfo {
    serde_wasm_bindgen::from_value(store.get_user_info().unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn test_default_key() {
    let store = WasmUserInfoStore::new(None).unwrap();
    assert_eq!(store.storage_key(), mnee_checkout_lib::USER_INFO_STORAGE_KEY);
}

#[wasm_bindgen_test]
fn test_set_email_persists() {
    let key = "test-user-info-email";
    let mut store = store(key);

    store.set_email("a@x.io".to_string());

    let raw = local_storage().get_item(key).unwrap().unwrap();
    assert_eq!(raw, r#"{"email":"a@x.io"}"#);
    assert_eq!(user_info(&store).email.as_deref(), Some("a@x.io"));
}

#[wasm_bindgen_test]
fn test_reload_restores_record() {
    let key = "test-user-info-reload";
    let mut store = store(key);
    store.set_email("a@x.io".to_string());
    store
        .set_shipping(object(&[("line1", "1 Main St"), ("city", "Springfield")]))
        .unwrap();

    let reloaded = WasmUserInfoStore::new(Some(config(key))).unwrap();
    let info = user_info(&reloaded);

    assert_eq!(info.email.as_deref(), Some("a@x.io"));
    let shipping = info.shipping.unwrap();
    assert_eq!(shipping.line1.as_deref(), Some("1 Main St"));
    assert_eq!(shipping.city.as_deref(), Some("Springfield"));
}

#[wasm_bindgen_test]
fn test_set_contact_replaces_whole_field() {
    let mut store = store("test-user-info-contact");

    store
        .set_contact(object(&[("name", "Ann"), ("phone", "555")]))
        .unwrap();
    store.set_contact(object(&[("name", "Bob")])).unwrap();

    let contact = user_info(&store).contact.unwrap();
    assert_eq!(contact.name.as_deref(), Some("Bob"));
    assert_eq!(contact.phone, None);
}

#[wasm_bindgen_test]
fn test_clear_removes_key() {
    let key = "test-user-info-clear";
    let mut store = store(key);
    store.set_email("a@x.io".to_string());

    store.clear_user_info();

    assert_eq!(local_storage().get_item(key).unwrap(), None);
    assert_eq!(user_info(&store), UserInfo::default());
}

#[wasm_bindgen_test]
fn test_corrupt_record_starts_empty() {
    let key = "test-user-info-corrupt";
    local_storage().set_item(key, "{not json").unwrap();

    let store = WasmUserInfoStore::new(Some(config(key))).unwrap();

    assert_eq!(user_info(&store), UserInfo::default());
}

#[wasm_bindgen_test]
fn test_invalid_shipping_rejected() {
    let mut store = store("test-user-info-invalid");
    assert!(store.set_shipping(JsValue::from_f64(42.0)).is_err());
    assert_eq!(user_info(&store), UserInfo::default());
}

#[wasm_bindgen_test]
fn test_numeric_postal_code_accepted() {
    let key = "test-user-info-numeric";
    let mut store = store(key);
    let shipping = object(&[("line1", "1 Main St")]);
    Reflect::set(&shipping, &"postalCode".into(), &JsValue::from_f64(12345.0)).unwrap();

    store.set_shipping(shipping).unwrap();

    let reloaded = WasmUserInfoStore::new(Some(config(key))).unwrap();
    let shipping = user_info(&reloaded).shipping.unwrap();
    assert_eq!(shipping.line1.as_deref(), Some("1 Main St"));
    assert!(shipping.extra.contains_key("postalCode"));
}
