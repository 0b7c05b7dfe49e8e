//! Error types for checkout operations.
//!
//! Only the wallet connection path surfaces errors to callers. The user info
//! store recovers from every storage failure locally, so [`CheckoutError`]
//! never escapes one of its public operations.

use crate::wallet::WalletProvider;

/// Error codes for FFI and JS integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CheckoutErrorCode {
    /// Wallet provider is not enabled in the widget configuration
    ProviderNotEnabled = 1000,
    /// Wallet SDK failed to connect
    WalletConnectionFailed = 1001,
    /// Wallet SDK failed to disconnect
    WalletDisconnectFailed = 1002,
    /// Invalid configuration value
    InvalidConfig = 2000,
    /// Serialization error
    Serialization = 3000,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Error type for checkout operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// The requested provider is not in the enabled wallet list.
    #[error("wallet provider '{0}' is not enabled")]
    ProviderNotEnabled(WalletProvider),

    /// The wallet SDK rejected or failed the connection attempt.
    #[error("failed to connect {provider}: {reason}")]
    WalletConnectionFailed {
        /// Provider the user tried to connect with
        provider: WalletProvider,
        /// Reason reported by the SDK
        reason: String,
    },

    /// The wallet SDK failed to disconnect.
    #[error("failed to disconnect wallet: {0}")]
    WalletDisconnectFailed(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal/unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CheckoutError {
    /// Get the error code for FFI/JS integration.
    pub fn code(&self) -> CheckoutErrorCode {
        match self {
            Self::ProviderNotEnabled(_) => CheckoutErrorCode::ProviderNotEnabled,
            Self::WalletConnectionFailed { .. } => CheckoutErrorCode::WalletConnectionFailed,
            Self::WalletDisconnectFailed(_) => CheckoutErrorCode::WalletDisconnectFailed,
            Self::InvalidConfig(_) => CheckoutErrorCode::InvalidConfig,
            Self::Serialization(_) => CheckoutErrorCode::Serialization,
            Self::Internal(_) => CheckoutErrorCode::Internal,
        }
    }

    /// Whether the error should be shown to the end user.
    ///
    /// Only wallet connection failures are user-visible; everything else is
    /// developer-facing.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::WalletConnectionFailed { .. })
    }
}

/// Result type for checkout operations.
pub type Result<T> = std::result::Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CheckoutError::ProviderNotEnabled(WalletProvider::Yours);
        assert_eq!(err.code(), CheckoutErrorCode::ProviderNotEnabled);
        assert_eq!(err.to_string(), "wallet provider 'yours' is not enabled");

        let err = CheckoutError::WalletConnectionFailed {
            provider: WalletProvider::Yours,
            reason: "extension missing".into(),
        };
        assert_eq!(err.code(), CheckoutErrorCode::WalletConnectionFailed);
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_from_serde_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CheckoutError = parse.into();
        assert_eq!(err.code(), CheckoutErrorCode::Serialization);
    }
}
