//! Browser `localStorage` as a durable slot

use mnee_checkout_lib::storage::{DurableSlot, StorageError, StorageResult};
use web_sys::{Storage, Window};

/// Get browser's localStorage
fn get_local_storage() -> StorageResult<Storage> {
    let window: Window =
        web_sys::window().ok_or_else(|| StorageError::unavailable("No window object"))?;
    window
        .local_storage()
        .map_err(|_| StorageError::unavailable("Could not access localStorage"))?
        .ok_or_else(|| StorageError::unavailable("localStorage is not available"))
}

/// [`DurableSlot`] over `window.localStorage`.
///
/// Storage is looked up on every call, so a page that blocks storage (private
/// mode, disabled cookies) gets `Unavailable` errors instead of a panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    pub fn new() -> Self {
        LocalStorageSlot
    }
}

impl DurableSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        get_local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::unavailable("Failed to read from localStorage"))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::quota_exceeded(key))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::unavailable("Failed to remove from localStorage"))
    }
}
