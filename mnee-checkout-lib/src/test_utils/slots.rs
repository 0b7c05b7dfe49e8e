//! Slot wrappers for simulating storage failures.

use std::cell::Cell;

use crate::storage::{DurableSlot, StorageError, StorageErrorCode, StorageResult};

/// Slot that forwards to `inner` unless told to fail, counting every attempt.
pub struct FailingSlot<S: DurableSlot> {
    inner: S,
    fail_reads: bool,
    fail_writes: bool,
    reads: Cell<usize>,
    writes: Cell<usize>,
    removes: Cell<usize>,
}

impl<S: DurableSlot> FailingSlot<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: false,
            reads: Cell::new(0),
            writes: Cell::new(0),
            removes: Cell::new(0),
        }
    }

    /// Fail every read as if storage were disabled.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Fail every write and remove as if the quota were exhausted.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn read_attempts(&self) -> usize {
        self.reads.get()
    }

    pub fn write_attempts(&self) -> usize {
        self.writes.get()
    }

    pub fn remove_attempts(&self) -> usize {
        self.removes.get()
    }
}

impl<S: DurableSlot> DurableSlot for FailingSlot<S> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(StorageError::with_key(
                StorageErrorCode::Unavailable,
                "simulated read failure",
                key,
            ));
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::quota_exceeded(key));
        }
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.removes.set(self.removes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::with_key(
                StorageErrorCode::Unavailable,
                "simulated remove failure",
                key,
            ));
        }
        self.inner.remove(key)
    }
}
