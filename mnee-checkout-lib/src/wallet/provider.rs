//! Wallet providers and which connect affordances they enable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CheckoutError;

/// Wallet integrations the checkout can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    /// RainbowKit modal (EVM wallets).
    RainbowKit,
    /// WalletConnect, rendered through the same Web3 modal as RainbowKit.
    WalletConnect,
    /// Yours Wallet browser extension (BSV).
    Yours,
}

impl WalletProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RainbowKit => "rainbowkit",
            Self::WalletConnect => "walletconnect",
            Self::Yours => "yours",
        }
    }

    /// Human-readable name used in connect buttons and notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RainbowKit => "RainbowKit",
            Self::WalletConnect => "WalletConnect",
            Self::Yours => "Yours Wallet",
        }
    }

    /// The affordance that connects through this provider.
    pub fn affordance(&self) -> ConnectAffordance {
        match self {
            Self::RainbowKit | Self::WalletConnect => ConnectAffordance::Web3Wallets,
            Self::Yours => ConnectAffordance::Yours,
        }
    }
}

impl fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletProvider {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rainbowkit" => Ok(Self::RainbowKit),
            "walletconnect" => Ok(Self::WalletConnect),
            "yours" => Ok(Self::Yours),
            other => Err(CheckoutError::InvalidConfig(format!(
                "unknown wallet provider '{}'",
                other
            ))),
        }
    }
}

/// A connect button the widget renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectAffordance {
    /// Opens the Web3 wallet modal (RainbowKit / WalletConnect).
    Web3Wallets,
    /// Connects the Yours Wallet extension.
    Yours,
}

impl ConnectAffordance {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Web3Wallets => "Connect Web3 Wallet",
            Self::Yours => "Connect Yours Wallet",
        }
    }
}

/// Which wallet providers the embedding page enables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnectionConfig {
    #[serde(default = "default_enabled_wallets")]
    pub enabled_wallets: Vec<WalletProvider>,
}

pub(crate) fn default_enabled_wallets() -> Vec<WalletProvider> {
    vec![WalletProvider::RainbowKit, WalletProvider::Yours]
}

impl Default for WalletConnectionConfig {
    fn default() -> Self {
        Self {
            enabled_wallets: default_enabled_wallets(),
        }
    }
}

impl WalletConnectionConfig {
    pub fn new(enabled_wallets: impl IntoIterator<Item = WalletProvider>) -> Self {
        Self {
            enabled_wallets: enabled_wallets.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, provider: WalletProvider) -> bool {
        self.enabled_wallets.contains(&provider)
    }

    /// Connect buttons to render, Web3 modal first.
    ///
    /// RainbowKit and WalletConnect share one button.
    pub fn affordances(&self) -> Vec<ConnectAffordance> {
        [ConnectAffordance::Web3Wallets, ConnectAffordance::Yours]
            .into_iter()
            .filter(|affordance| {
                self.enabled_wallets
                    .iter()
                    .any(|provider| provider.affordance() == *affordance)
            })
            .collect()
    }
}
