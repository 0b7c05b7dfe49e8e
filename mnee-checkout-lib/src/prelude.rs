//! Common imports for embedding the checkout.
//!
//! ```rust
//! use mnee_checkout_lib::prelude::*;
//! ```

pub use crate::config::CheckoutConfig;
pub use crate::errors::{CheckoutError, CheckoutErrorCode, Result};
pub use crate::storage::{DurableSlot, InMemorySlot, StorageError, StorageErrorCode};
pub use crate::theme::{
    AppearanceListener, AppearanceSource, ListenerId, ManualAppearance, Theme, ThemePreference,
    ThemeWatcher,
};
pub use crate::user_info::{ContactInfo, ShippingAddress, UserInfo, UserInfoStore};
pub use crate::wallet::{
    shorten_address, ConnectAffordance, ConnectionView, WalletConnection,
    WalletConnectionConfig, WalletConnector, WalletEvents, WalletProvider, WalletState,
};
pub use crate::{LEGACY_USER_INFO_STORAGE_KEY, USER_INFO_STORAGE_KEY};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::storage::FileSlot;
