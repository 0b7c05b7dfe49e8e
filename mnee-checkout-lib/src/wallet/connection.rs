//! Wallet connection controller.
//!
//! [`WalletConnection`] sits between the wallet SDKs (reached through
//! [`WalletConnector`]) and the host page (notified through
//! [`WalletEvents`]). It owns the current [`WalletState`] and a
//! [`ConnectionObserver`], so the page hears about each connection exactly
//! once no matter how many times the SDK reports it.

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::{CheckoutError, Result};

use super::observer::{ConnectionEvent, ConnectionObserver, WalletState};
use super::provider::{ConnectAffordance, WalletConnectionConfig, WalletProvider};

/// External wallet SDK.
///
/// Wallet SDKs are promise-based and live on the browser main thread, hence
/// `?Send`.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Ask the SDK to connect through `provider` and report the resulting state.
    ///
    /// Modal-based providers may return before the user picks a wallet; the
    /// eventual connection then arrives through [`WalletConnection::sync`].
    async fn connect(&self, provider: WalletProvider) -> Result<WalletState>;

    /// Disconnect the active wallet.
    async fn disconnect(&self) -> Result<()>;
}

/// Host page callbacks.
///
/// All methods default to no-ops.
pub trait WalletEvents {
    /// A wallet connected. Called once per connected session.
    fn on_connect(&mut self, _address: &str, _provider: WalletProvider) {}

    /// The connected wallet disconnected. Called once per session end.
    fn on_disconnect(&mut self) {}

    /// Show a blocking, user-visible failure notification.
    fn notify_failure(&mut self, _message: &str) {}
}

impl WalletEvents for () {}

/// What the widget should render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ConnectionView {
    #[serde(rename_all = "camelCase")]
    Connected {
        short_address: String,
        provider: Option<WalletProvider>,
    },
    Options { affordances: Vec<ConnectAffordance> },
}

/// Abbreviate an address as `0x1234...abcd`.
///
/// Addresses of ten characters or fewer are returned whole.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Message shown when `provider` fails to connect.
pub fn connect_failure_message(provider: WalletProvider) -> String {
    match provider {
        WalletProvider::Yours => {
            "Failed to connect Yours Wallet. Please make sure the extension is installed."
                .to_string()
        }
        other => format!("Failed to connect {}. Please try again.", other.display_name()),
    }
}

pub struct WalletConnection<C: WalletConnector, E: WalletEvents> {
    config: WalletConnectionConfig,
    connector: C,
    events: E,
    observer: ConnectionObserver,
    state: WalletState,
}

impl<C: WalletConnector, E: WalletEvents> WalletConnection<C, E> {
    pub fn new(config: WalletConnectionConfig, connector: C, events: E) -> Self {
        Self {
            config,
            connector,
            events,
            observer: ConnectionObserver::new(),
            state: WalletState::disconnected(),
        }
    }

    pub fn config(&self) -> &WalletConnectionConfig {
        &self.config
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Connect through `provider`.
    ///
    /// On SDK failure the user is notified once and the error is returned.
    /// Nothing is retried.
    pub async fn connect(&mut self, provider: WalletProvider) -> Result<()> {
        self.ensure_enabled(provider)?;
        let result = self.connector.connect(provider).await;
        self.finish_connect(provider, result)
    }

    /// Reject providers the page did not enable.
    pub fn ensure_enabled(&self, provider: WalletProvider) -> Result<()> {
        if self.config.is_enabled(provider) {
            Ok(())
        } else {
            Err(CheckoutError::ProviderNotEnabled(provider))
        }
    }

    /// Apply the outcome of a connect call made against the connector.
    ///
    /// Split out of [`connect`](Self::connect) for hosts that must not hold
    /// the controller borrowed while the SDK promise is pending.
    pub fn finish_connect(
        &mut self,
        provider: WalletProvider,
        result: Result<WalletState>,
    ) -> Result<()> {
        match result {
            Ok(state) => {
                self.sync(state);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%provider, error = %e, "wallet connection failed");
                self.events.notify_failure(&connect_failure_message(provider));
                Err(match e {
                    CheckoutError::WalletConnectionFailed { .. } => e,
                    other => CheckoutError::WalletConnectionFailed {
                        provider,
                        reason: other.to_string(),
                    },
                })
            }
        }
    }

    /// Disconnect the active wallet.
    ///
    /// SDK failures are logged and otherwise ignored; the state is left as is.
    pub async fn disconnect(&mut self) {
        let result = self.connector.disconnect().await;
        self.finish_disconnect(result);
    }

    /// Apply the outcome of a disconnect call made against the connector.
    pub fn finish_disconnect(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.sync(WalletState::disconnected()),
            Err(e) => tracing::debug!(error = %e, "wallet disconnect failed"),
        }
    }

    /// Feed a state reported by the SDK outside of [`connect`](Self::connect),
    /// e.g. a modal completing or the extension locking.
    pub fn sync(&mut self, state: WalletState) {
        match self.observer.observe(&state) {
            Some(ConnectionEvent::Connected { address, provider }) => {
                tracing::info!(%provider, "wallet connected");
                self.events.on_connect(&address, provider);
            }
            Some(ConnectionEvent::Disconnected) => {
                tracing::info!("wallet disconnected");
                self.events.on_disconnect();
            }
            None => {}
        }
        self.state = state;
    }

    /// Render model for the current state.
    pub fn view(&self) -> ConnectionView {
        match &self.state.address {
            Some(address) if self.state.is_connected() => ConnectionView::Connected {
                short_address: shorten_address(address),
                provider: self.state.provider,
            },
            _ => ConnectionView::Options {
                affordances: self.config.affordances(),
            },
        }
    }
}
