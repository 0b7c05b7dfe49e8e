//! Durable key-value slots for persisting checkout state.
//!
//! A [`DurableSlot`] is the smallest storage contract the checkout needs: a
//! string value per string key that survives reloads. Implementations:
//! - In-memory storage (tests, server-side rendering, private contexts)
//! - One-file-per-key directory storage (native hosts)
//! - Browser `localStorage` (provided by the `mnee-checkout-web` crate)
//!
//! ## Usage
//!
//! ```rust
//! use mnee_checkout_lib::storage::{DurableSlot, InMemorySlot};
//!
//! let slot = InMemorySlot::new();
//! slot.write("greeting", "hello").unwrap();
//! assert_eq!(slot.read("greeting").unwrap().as_deref(), Some("hello"));
//! slot.remove("greeting").unwrap();
//! assert_eq!(slot.read("greeting").unwrap(), None);
//! ```

mod memory;
mod traits;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::InMemorySlot;
pub use traits::{DurableSlot, StorageError, StorageErrorCode, StorageResult};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSlot;
