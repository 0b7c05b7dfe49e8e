//! Edge-triggered connection notifications.

use serde::{Deserialize, Serialize};

use super::provider::WalletProvider;

/// Wallet state as reported by the wallet SDK.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub provider: Option<WalletProvider>,
}

impl WalletState {
    pub fn connected(address: impl Into<String>, provider: WalletProvider) -> Self {
        Self {
            address: Some(address.into()),
            provider: Some(provider),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Connected means the SDK reports both an address and a provider.
    pub fn is_connected(&self) -> bool {
        self.address.is_some() && self.provider.is_some()
    }
}

/// A connection transition worth telling the host page about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionEvent {
    Connected {
        address: String,
        provider: WalletProvider,
    },
    Disconnected,
}

/// Turns a stream of wallet states into one event per transition.
///
/// `notified` is set when `Connected` is emitted and cleared only when the
/// wallet disconnects, so re-renders, address refreshes or duplicate SDK
/// callbacks within one session never produce a second `Connected`.
#[derive(Debug, Default)]
pub struct ConnectionObserver {
    notified: bool,
}

impl ConnectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `Connected` has been emitted for the current session.
    pub fn is_notified(&self) -> bool {
        self.notified
    }

    pub fn observe(&mut self, state: &WalletState) -> Option<ConnectionEvent> {
        match (&state.address, state.provider) {
            (Some(address), Some(provider)) if !self.notified => {
                self.notified = true;
                Some(ConnectionEvent::Connected {
                    address: address.clone(),
                    provider,
                })
            }
            (Some(_), Some(_)) => None,
            _ if self.notified => {
                self.notified = false;
                Some(ConnectionEvent::Disconnected)
            }
            _ => None,
        }
    }
}
