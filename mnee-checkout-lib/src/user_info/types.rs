//! Checkout user info record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Remove `key` from `map` if it holds a string.
///
/// Values of any other type stay in `map`, so they round-trip through `extra`
/// instead of failing the whole record.
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(value)) => Some(value),
        Some(Value::Null) | None => None,
        Some(other) => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

/// Mailing address collected at checkout.
///
/// Fields the widget does not know about, and known fields that are not
/// strings, are kept in `extra` so any address object supplied by the host
/// page round-trips unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for ShippingAddress {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            name: take_string(&mut map, "name"),
            line1: take_string(&mut map, "line1"),
            line2: take_string(&mut map, "line2"),
            city: take_string(&mut map, "city"),
            state: take_string(&mut map, "state"),
            postal_code: take_string(&mut map, "postalCode"),
            country: take_string(&mut map, "country"),
            extra: map,
        }
    }
}

impl ShippingAddress {
    /// Create an address with the first line and city set.
    pub fn new(line1: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            line1: Some(line1.into()),
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Contact details collected at checkout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for ContactInfo {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            name: take_string(&mut map, "name"),
            phone: take_string(&mut map, "phone"),
            email: take_string(&mut map, "email"),
            extra: map,
        }
    }
}

impl ContactInfo {
    /// Contact info holding only a phone number.
    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Everything the checkout remembers about the buyer. All fields optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl UserInfo {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.shipping.is_none() && self.contact.is_none()
    }

    /// Serialize to the persisted JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse the persisted JSON form.
    ///
    /// `null` fields are treated as absent.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_serializes_to_empty_object() {
        assert_eq!(UserInfo::default().to_json().unwrap(), "{}");
        assert!(UserInfo::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let info = UserInfo::from_json(r#"{"email":null,"shipping":null}"#).unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let address = ShippingAddress::new("1 Main St", "Springfield").with_postal_code("12345");
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(
            value,
            json!({"line1": "1 Main St", "city": "Springfield", "postalCode": "12345"})
        );
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = json!({"line1": "1 Main St", "apartment": {"floor": 3}, "notes": "ring twice"});
        let address: ShippingAddress = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(address.line1.as_deref(), Some("1 Main St"));
        assert_eq!(address.extra.len(), 2);
        assert_eq!(serde_json::to_value(&address).unwrap(), raw);
    }

    #[test]
    fn test_non_string_known_fields_kept_in_extra() {
        let raw = json!({"line1": "1 Main St", "postalCode": 12345, "country": null});
        let address: ShippingAddress = serde_json::from_value(raw).unwrap();

        assert_eq!(address.line1.as_deref(), Some("1 Main St"));
        assert_eq!(address.postal_code, None);
        assert_eq!(address.extra.get("postalCode"), Some(&json!(12345)));
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({"line1": "1 Main St", "postalCode": 12345})
        );

        let contact: ContactInfo =
            serde_json::from_value(json!({"phone": 5551234, "name": "Ada"})).unwrap();
        assert_eq!(contact.name.as_deref(), Some("Ada"));
        assert_eq!(contact.extra.get("phone"), Some(&json!(5551234)));
    }

    #[test]
    fn test_non_object_address_rejected() {
        assert!(serde_json::from_value::<ShippingAddress>(json!("1 Main St")).is_err());
    }

    #[test]
    fn test_contact_builders() {
        let contact = ContactInfo::with_phone("555-1234").name("Ada");
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({"name": "Ada", "phone": "555-1234"})
        );
    }
}
