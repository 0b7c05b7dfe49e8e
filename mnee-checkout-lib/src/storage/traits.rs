//! Core trait and error type for durable slots.

use std::fmt;

/// Error codes for storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StorageErrorCode {
    /// Storage is disabled or not present in this context
    Unavailable = 1000,
    /// Storage quota exceeded
    QuotaExceeded = 2000,
    /// Underlying I/O failed
    Io = 3000,
    /// Internal error
    Internal = 9999,
}

/// Error type for storage operations.
#[derive(Debug)]
pub struct StorageError {
    /// Error code for FFI/JS integration
    pub code: StorageErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Key related to the error (if applicable)
    pub key: Option<String>,
}

impl StorageError {
    /// Create a new error.
    pub fn new(code: StorageErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            key: None,
        }
    }

    /// Create a new error with associated key.
    pub fn with_key(
        code: StorageErrorCode,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Create an "unavailable" error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(StorageErrorCode::Unavailable, reason)
    }

    /// Create a "quota exceeded" error for a write to `key`.
    pub fn quota_exceeded(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: StorageErrorCode::QuotaExceeded,
            message: format!("Storage quota exceeded writing {}", key),
            key: Some(key),
        }
    }

    /// Check if storage was unavailable rather than failing mid-operation.
    pub fn is_unavailable(&self) -> bool {
        self.code == StorageErrorCode::Unavailable
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            write!(f, "{} (key: {})", self.message, key)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::new(StorageErrorCode::Io, err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A durable, origin-scoped key-value location that survives reloads.
///
/// Operations are synchronous: the browser `localStorage` API is, and the
/// checkout flow writes through on every change. Implementations are not
/// required to be `Send` since browser storage handles are not.
pub trait DurableSlot {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - `QuotaExceeded` if storage is full
    /// - `Unavailable` if storage is disabled
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check whether `key` currently holds a value.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.read(key)?.is_some())
    }
}

impl<T: DurableSlot + ?Sized> DurableSlot for &T {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: DurableSlot + ?Sized> DurableSlot for Box<T> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
