//! End-to-end persistence scenarios for the user info store

use mnee_checkout_lib::prelude::*;
use mnee_checkout_lib::test_utils::FailingSlot;
use serde_json::json;

#[test]
fn test_email_and_shipping_from_empty_slot() {
    let slot = InMemorySlot::new();
    let mut store = UserInfoStore::new(slot.clone());

    store.set_email("a@example.com");
    store.set_shipping(ShippingAddress::new("1 Main St", "Springfield"));

    let value = serde_json::to_value(store.user_info()).unwrap();
    assert_eq!(
        value,
        json!({
            "email": "a@example.com",
            "shipping": {"line1": "1 Main St", "city": "Springfield"}
        })
    );

    let persisted: serde_json::Value =
        serde_json::from_str(&slot.read(USER_INFO_STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, value);
}

#[test]
fn test_clear_existing_record() {
    let slot = InMemorySlot::with_entry(USER_INFO_STORAGE_KEY, r#"{"email":"a@example.com"}"#);
    let mut store = UserInfoStore::new(slot.clone());

    store.clear_user_info();

    assert_eq!(serde_json::to_value(store.user_info()).unwrap(), json!({}));
    assert_eq!(slot.read(USER_INFO_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_clear_twice_matches_clear_once() {
    let slot = InMemorySlot::new();
    let mut once = UserInfoStore::new(slot.clone());
    once.set_email("a@example.com");
    once.clear_user_info();
    let after_once = once.snapshot();

    once.clear_user_info();
    assert_eq!(once.snapshot(), after_once);
    assert!(slot.is_empty());
}

#[test]
fn test_malformed_slot_defaults() {
    let slot = InMemorySlot::with_entry(USER_INFO_STORAGE_KEY, "{\"email\": ");
    let store = UserInfoStore::new(slot);
    assert_eq!(store.snapshot(), UserInfo::default());
}

#[test]
fn test_storage_failure_during_set_contact() {
    let slot = FailingSlot::new(InMemorySlot::new()).fail_writes();
    let mut store = UserInfoStore::new(slot);

    store.set_contact(ContactInfo::with_phone("555-1234"));

    assert_eq!(
        store.user_info().contact.as_ref().and_then(|c| c.phone.as_deref()),
        Some("555-1234")
    );
}

#[test]
fn test_opaque_fields_survive_reload() {
    let slot = InMemorySlot::new();
    let mut store = UserInfoStore::new(slot.clone());

    let shipping: ShippingAddress = serde_json::from_value(json!({
        "line1": "1 Main St",
        "city": "Springfield",
        "deliveryWindow": {"from": "09:00", "to": "12:00"}
    }))
    .unwrap();
    store.set_shipping(shipping.clone());

    let reloaded = UserInfoStore::new(slot);
    assert_eq!(reloaded.user_info().shipping, Some(shipping));
}

#[test]
fn test_numeric_postal_code_keeps_record() {
    let raw = json!({
        "email": "a@example.com",
        "shipping": {"line1": "1 Main St", "postalCode": 12345}
    });
    let slot = InMemorySlot::with_entry(USER_INFO_STORAGE_KEY, raw.to_string());

    let mut store = UserInfoStore::new(slot.clone());
    assert_eq!(store.user_info().email.as_deref(), Some("a@example.com"));
    let shipping = store.user_info().shipping.clone().unwrap();
    assert_eq!(shipping.line1.as_deref(), Some("1 Main St"));
    assert_eq!(shipping.extra.get("postalCode"), Some(&json!(12345)));

    store.set_email("b@example.com");
    let persisted: serde_json::Value =
        serde_json::from_str(&slot.read(USER_INFO_STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted["shipping"], raw["shipping"]);
}

#[test]
fn test_file_slot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = UserInfoStore::new(FileSlot::new(dir.path()));
        store.set_email("a@example.com");
        store.set_contact(ContactInfo::with_phone("555-1234").name("Ada"));
    }

    let store = UserInfoStore::new(FileSlot::new(dir.path()));
    assert_eq!(store.user_info().email.as_deref(), Some("a@example.com"));
    assert_eq!(
        store.user_info().contact.as_ref().and_then(|c| c.name.as_deref()),
        Some("Ada")
    );
}

#[test]
fn test_stores_with_different_keys_are_independent() {
    let slot = InMemorySlot::new();
    let mut shop_a = UserInfoStore::with_key(slot.clone(), "shop-a");
    let mut shop_b = UserInfoStore::with_key(slot.clone(), "shop-b");

    shop_a.set_email("a@example.com");
    shop_b.set_email("b@example.com");
    shop_a.clear_user_info();

    assert_eq!(slot.read("shop-a").unwrap(), None);
    let b = UserInfoStore::with_key(slot, "shop-b");
    assert_eq!(b.user_info().email.as_deref(), Some("b@example.com"));
}
