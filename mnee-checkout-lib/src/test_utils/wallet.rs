//! Scripted wallet SDK and event recorder.

use std::cell::Cell;

use async_trait::async_trait;

use crate::errors::{CheckoutError, Result};
use crate::wallet::{WalletConnector, WalletEvents, WalletProvider, WalletState};

/// Wallet SDK double that connects to a fixed address or always fails.
pub struct MockConnector {
    address: Option<String>,
    failure: Option<String>,
    fail_disconnect: bool,
    connects: Cell<usize>,
    disconnects: Cell<usize>,
}

impl MockConnector {
    /// Connector whose `connect` succeeds with `address`.
    pub fn connecting_to(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            failure: None,
            fail_disconnect: false,
            connects: Cell::new(0),
            disconnects: Cell::new(0),
        }
    }

    /// Connector whose `connect` always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            address: None,
            failure: Some(reason.into()),
            fail_disconnect: false,
            connects: Cell::new(0),
            disconnects: Cell::new(0),
        }
    }

    pub fn with_failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    pub fn connect_calls(&self) -> usize {
        self.connects.get()
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnects.get()
    }
}

#[async_trait(?Send)]
impl WalletConnector for MockConnector {
    async fn connect(&self, provider: WalletProvider) -> Result<WalletState> {
        self.connects.set(self.connects.get() + 1);
        if let Some(reason) = &self.failure {
            return Err(CheckoutError::Internal(reason.clone()));
        }
        Ok(match &self.address {
            Some(address) => WalletState::connected(address.clone(), provider),
            None => WalletState::disconnected(),
        })
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnects.set(self.disconnects.get() + 1);
        if self.fail_disconnect {
            return Err(CheckoutError::WalletDisconnectFailed(
                "simulated disconnect failure".into(),
            ));
        }
        Ok(())
    }
}

/// A callback received by [`RecordingEvents`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    Connect(String, WalletProvider),
    Disconnect,
    Failure(String),
}

/// [`WalletEvents`] implementation that records every call.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    events: Vec<RecordedEvent>,
}

impl RecordingEvents {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.clone()
    }
}

impl WalletEvents for RecordingEvents {
    fn on_connect(&mut self, address: &str, provider: WalletProvider) {
        self.events
            .push(RecordedEvent::Connect(address.to_string(), provider));
    }

    fn on_disconnect(&mut self) {
        self.events.push(RecordedEvent::Disconnect);
    }

    fn notify_failure(&mut self, message: &str) {
        self.events.push(RecordedEvent::Failure(message.to_string()));
    }
}
