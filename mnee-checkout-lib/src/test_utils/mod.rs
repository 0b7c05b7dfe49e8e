//! Test utilities for checkout components.
//!
//! - [`FailingSlot`]: wraps a slot and fails reads or writes on demand
//! - [`MockConnector`]: scripted wallet SDK
//! - [`RecordingEvents`]: captures host page callbacks in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mnee_checkout_lib::storage::InMemorySlot;
//! use mnee_checkout_lib::test_utils::FailingSlot;
//! use mnee_checkout_lib::user_info::{ContactInfo, UserInfoStore};
//!
//! let slot = FailingSlot::new(InMemorySlot::new()).fail_writes();
//! let mut store = UserInfoStore::new(slot);
//! store.set_contact(ContactInfo::with_phone("555-1234"));
//! assert!(store.user_info().contact.is_some());
//! ```

mod slots;
mod wallet;

pub use slots::FailingSlot;
pub use wallet::{MockConnector, RecordedEvent, RecordingEvents};
