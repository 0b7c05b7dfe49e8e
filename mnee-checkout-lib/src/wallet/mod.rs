//! Wallet connection state for the checkout widget.
//!
//! Wallet SDKs (address derivation, signing, the RainbowKit modal, the Yours
//! extension) are external; this module only decides what to render and when
//! to notify the host page.

mod connection;
mod observer;
mod provider;

pub use connection::{
    connect_failure_message, shorten_address, ConnectionView, WalletConnection, WalletConnector,
    WalletEvents,
};
pub use observer::{ConnectionEvent, ConnectionObserver, WalletState};
pub use provider::{ConnectAffordance, WalletConnectionConfig, WalletProvider};

pub(crate) use provider::default_enabled_wallets;
