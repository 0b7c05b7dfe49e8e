//! JavaScript-facing user info store
//!
//! # Examples
//!
//! ```js
//! import { UserInfoStore } from "mnee-checkout-web";
//!
//! const store = new UserInfoStore();
//! store.setEmail("a@example.com");
//! store.setShipping({ line1: "1 Main St", city: "Springfield" });
//! store.getUserInfo(); // { email: "a@example.com", shipping: { ... } }
//! ```

use mnee_checkout_lib::user_info::{ContactInfo, ShippingAddress, UserInfoStore};
use mnee_checkout_lib::CheckoutConfig;
use wasm_bindgen::prelude::*;

use crate::storage::LocalStorageSlot;
use crate::utils;

/// User info persisted to `localStorage`.
///
/// None of the methods throw because of storage problems; a blocked or full
/// `localStorage` only means the data will not survive a reload.
#[wasm_bindgen(js_name = UserInfoStore)]
pub struct WasmUserInfoStore {
    inner: UserInfoStore<LocalStorageSlot>,
}

#[wasm_bindgen(js_class = UserInfoStore)]
impl WasmUserInfoStore {
    /// Load the store, optionally from a checkout config object
    /// (`{ storageKey }` is the only field used here).
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<WasmUserInfoStore, JsValue> {
        let config = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value::<CheckoutConfig>(value)
                    .map_err(|e| utils::js_error(&format!("Invalid config: {}", e)))?
            }
            _ => CheckoutConfig::default(),
        };
        config
            .validate()
            .map_err(|e| utils::checkout_error(&e))?;

        Ok(WasmUserInfoStore {
            inner: UserInfoStore::with_key(LocalStorageSlot::new(), config.storage_key),
        })
    }

    /// Current record as a plain object; absent fields are omitted
    #[wasm_bindgen(js_name = getUserInfo)]
    pub fn get_user_info(&self) -> Result<JsValue, JsValue> {
        utils::to_js(self.inner.user_info())
    }

    #[wasm_bindgen(js_name = setEmail)]
    pub fn set_email(&mut self, email: String) {
        self.inner.set_email(email);
    }

    /// Replace the shipping address
    ///
    /// Throws only if `shipping` is not an object.
    #[wasm_bindgen(js_name = setShipping)]
    pub fn set_shipping(&mut self, shipping: JsValue) -> Result<(), JsValue> {
        let shipping: ShippingAddress = serde_wasm_bindgen::from_value(shipping)
            .map_err(|e| utils::js_error(&format!("Invalid shipping address: {}", e)))?;
        self.inner.set_shipping(shipping);
        Ok(())
    }

    /// Replace the contact info
    ///
    /// Throws only if `contact` is not an object.
    #[wasm_bindgen(js_name = setContact)]
    pub fn set_contact(&mut self, contact: JsValue) -> Result<(), JsValue> {
        let contact: ContactInfo = serde_wasm_bindgen::from_value(contact)
            .map_err(|e| utils::js_error(&format!("Invalid contact info: {}", e)))?;
        self.inner.set_contact(contact);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearUserInfo)]
    pub fn clear_user_info(&mut self) {
        self.inner.clear_user_info();
    }

    /// localStorage key the record lives under
    #[wasm_bindgen(getter, js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.inner.key().to_string()
    }
}
