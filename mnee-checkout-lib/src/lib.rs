//! # MNEE Checkout
//!
//! Platform-independent building blocks for an embeddable cryptocurrency
//! checkout widget:
//!
//! - [`user_info`]: checkout-time user information (email, shipping, contact)
//!   kept in memory and mirrored write-through to a [`storage::DurableSlot`].
//! - [`theme`]: resolves a `light | dark | auto` preference, following the
//!   system appearance while `auto` is active.
//! - [`wallet`]: decides which connect affordances to show and turns wallet SDK
//!   state into exactly-once connect/disconnect notifications.
//!
//! ## Example
//!
//! ```
//! use mnee_checkout_lib::storage::InMemorySlot;
//! use mnee_checkout_lib::user_info::{ShippingAddress, UserInfoStore};
//!
//! let slot = InMemorySlot::new();
//! let mut store = UserInfoStore::new(slot.clone());
//! store.set_email("a@example.com");
//! store.set_shipping(ShippingAddress::new("1 Main St", "Springfield"));
//!
//! // A second store over the same slot sees the persisted record.
//! let reloaded = UserInfoStore::new(slot);
//! assert_eq!(reloaded.user_info(), store.user_info());
//! ```

pub mod config;
pub mod errors;
pub mod prelude;
pub mod storage;
pub mod theme;
pub mod user_info;
pub mod wallet;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::CheckoutConfig;
pub use errors::{CheckoutError, CheckoutErrorCode, Result};
pub use storage::{DurableSlot, StorageError, StorageErrorCode};
pub use theme::{AppearanceSource, Theme, ThemePreference, ThemeWatcher};
pub use user_info::{ContactInfo, ShippingAddress, UserInfo, UserInfoStore};
pub use wallet::{WalletConnection, WalletConnectionConfig, WalletProvider, WalletState};

/// Storage key for the persisted user info record.
///
/// The `-v1` suffix versions the record layout; see
/// [`LEGACY_USER_INFO_STORAGE_KEY`] for the key it replaced.
pub const USER_INFO_STORAGE_KEY: &str = "mnee-checkout-user-info-v1";

/// Unversioned key written by earlier releases of the widget.
pub const LEGACY_USER_INFO_STORAGE_KEY: &str = "mnee-checkout-user-info";
