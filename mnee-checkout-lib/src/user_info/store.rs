//! Write-through store for checkout user info.

use crate::storage::DurableSlot;
use crate::{LEGACY_USER_INFO_STORAGE_KEY, USER_INFO_STORAGE_KEY};

use super::types::{ContactInfo, ShippingAddress, UserInfo};

/// Single source of truth for checkout user info within a session.
///
/// Every mutator merges one field into the record and immediately writes the
/// whole record to the slot. Storage failures are logged and swallowed: the
/// in-memory record stays authoritative and no operation returns an error.
pub struct UserInfoStore<S: DurableSlot> {
    slot: S,
    key: String,
    info: UserInfo,
}

impl<S: DurableSlot> UserInfoStore<S> {
    /// Load the store from `slot` under [`USER_INFO_STORAGE_KEY`].
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, USER_INFO_STORAGE_KEY)
    }

    /// Load the store from `slot` under a custom key.
    ///
    /// Records written under [`LEGACY_USER_INFO_STORAGE_KEY`] are adopted and
    /// moved when the default key is in use and holds nothing.
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let info = match load(&slot, &key) {
            Some(info) => info,
            None if key == USER_INFO_STORAGE_KEY => {
                migrate_legacy(&slot, &key).unwrap_or_default()
            }
            None => UserInfo::default(),
        };
        Self { slot, key, info }
    }

    /// Current record.
    pub fn user_info(&self) -> &UserInfo {
        &self.info
    }

    /// Owned copy of the current record.
    pub fn snapshot(&self) -> UserInfo {
        self.info.clone()
    }

    /// Key the record is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Replace the email and persist.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.info.email = Some(email.into());
        self.persist();
    }

    /// Replace the whole shipping address and persist.
    ///
    /// Sub-fields are not merged with the previous address.
    pub fn set_shipping(&mut self, shipping: ShippingAddress) {
        self.info.shipping = Some(shipping);
        self.persist();
    }

    /// Replace the whole contact info and persist.
    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.info.contact = Some(contact);
        self.persist();
    }

    /// Reset to the empty record and erase the slot entry.
    pub fn clear_user_info(&mut self) {
        self.info = UserInfo::default();
        if let Err(e) = self.slot.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to erase user info");
        }
    }

    fn persist(&self) {
        let json = match self.info.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to serialize user info");
                return;
            }
        };
        match self.slot.write(&self.key, &json) {
            Ok(()) => tracing::debug!(key = %self.key, bytes = json.len(), "persisted user info"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "failed to persist user info"),
        }
    }
}

/// Read and parse the record under `key`, logging anything unusable.
fn load<S: DurableSlot>(slot: &S, key: &str) -> Option<UserInfo> {
    let raw = match slot.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read user info, starting empty");
            return None;
        }
    };
    match UserInfo::from_json(&raw) {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored user info is corrupt, starting empty");
            None
        }
    }
}

fn migrate_legacy<S: DurableSlot>(slot: &S, key: &str) -> Option<UserInfo> {
    let info = load(slot, LEGACY_USER_INFO_STORAGE_KEY)?;
    let json = info.to_json().ok()?;
    if let Err(e) = slot.write(key, &json) {
        tracing::warn!(key, error = %e, "failed to migrate legacy user info");
        return Some(info);
    }
    if let Err(e) = slot.remove(LEGACY_USER_INFO_STORAGE_KEY) {
        tracing::warn!(error = %e, "failed to remove legacy user info");
    }
    tracing::info!(from = LEGACY_USER_INFO_STORAGE_KEY, to = key, "migrated user info");
    Some(info)
}
