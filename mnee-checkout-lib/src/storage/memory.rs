//! In-memory durable slot.
//!
//! Values live as long as any clone of the slot. Clones share the same map, so
//! a test can drop a store and load a fresh one "after a reload".
//!
//! # Thread Safety
//!
//! This storage uses `RwLock` for access. Lock poisoning is handled by
//! returning an error rather than panicking.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::traits::{DurableSlot, StorageError, StorageErrorCode, StorageResult};

/// In-memory implementation of [`DurableSlot`].
#[derive(Clone, Default)]
pub struct InMemorySlot {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

fn lock_error(context: &str) -> StorageError {
    StorageError::new(
        StorageErrorCode::Internal,
        format!("InMemorySlot: lock poisoned during {}", context),
    )
}

impl InMemorySlot {
    /// Create a new empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        if let Ok(mut entries) = slot.entries.write() {
            entries.insert(key.into(), value.into());
        }
        slot
    }

    /// Get the number of stored keys.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the slot is empty.
    ///
    /// Returns true if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl DurableSlot for InMemorySlot {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| lock_error("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("write"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("remove"))?;
        entries.remove(key);
        Ok(())
    }
}
