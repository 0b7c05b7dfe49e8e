//! Widget configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CheckoutError, Result};
use crate::theme::ThemePreference;
use crate::wallet::{default_enabled_wallets, WalletConnectionConfig, WalletProvider};
use crate::USER_INFO_STORAGE_KEY;

/// Configuration supplied by the embedding page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Theme preference.
    #[serde(default)]
    pub theme: ThemePreference,

    /// Wallet providers offered to the buyer.
    #[serde(default = "default_enabled_wallets")]
    pub enabled_wallets: Vec<WalletProvider>,

    /// Key the user info record is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    USER_INFO_STORAGE_KEY.to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            enabled_wallets: default_enabled_wallets(),
            storage_key: default_storage_key(),
        }
    }
}

impl CheckoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CheckoutError::InvalidConfig(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CheckoutError::InvalidConfig(
                "storageKey must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_enabled_wallets(
        mut self,
        wallets: impl IntoIterator<Item = WalletProvider>,
    ) -> Self {
        self.enabled_wallets = wallets.into_iter().collect();
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn wallet_config(&self) -> WalletConnectionConfig {
        WalletConnectionConfig::new(self.enabled_wallets.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::from_json("{}").unwrap();
        assert_eq!(config, CheckoutConfig::default());
        assert_eq!(config.theme, ThemePreference::Light);
        assert_eq!(config.storage_key, USER_INFO_STORAGE_KEY);
        assert_eq!(
            config.enabled_wallets,
            vec![WalletProvider::RainbowKit, WalletProvider::Yours]
        );
    }

    #[test]
    fn test_parse() {
        let config = CheckoutConfig::from_json(
            r#"{"theme":"auto","enabledWallets":["yours"],"storageKey":"shop-1"}"#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemePreference::Auto);
        assert_eq!(config.wallet_config().enabled_wallets, vec![WalletProvider::Yours]);
        assert_eq!(config.storage_key, "shop-1");
    }

    #[test]
    fn test_invalid() {
        assert!(CheckoutConfig::from_json(r#"{"theme":"sepia"}"#).is_err());
        assert!(CheckoutConfig::from_json(r#"{"storageKey":"  "}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheckoutConfig::load(dir.path().join("checkout.json")).unwrap();
        assert_eq!(config, CheckoutConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkout.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let config = CheckoutConfig::load(&path).unwrap();
        assert_eq!(config.theme, ThemePreference::Dark);
    }
}
