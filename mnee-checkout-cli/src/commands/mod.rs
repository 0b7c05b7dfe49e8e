//! CLI command implementations

pub mod show;
pub mod theme;
pub mod user_info;
pub mod wallets;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mnee_checkout_lib::storage::{DurableSlot, FileSlot};
use mnee_checkout_lib::{CheckoutConfig, UserInfo, UserInfoStore};

/// Name of the optional configuration file inside the storage directory.
pub const CONFIG_FILE: &str = "checkout.json";

pub fn config_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join(CONFIG_FILE)
}

/// Load `checkout.json`, falling back to defaults when it does not exist.
pub fn load_config(storage_dir: &Path) -> Result<CheckoutConfig> {
    let path = config_path(storage_dir);
    CheckoutConfig::load(&path).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn save_config(storage_dir: &Path, config: &CheckoutConfig) -> Result<()> {
    std::fs::create_dir_all(storage_dir)
        .with_context(|| format!("Failed to create {}", storage_dir.display()))?;
    let json = serde_json::to_string_pretty(config)?;
    let path = config_path(storage_dir);
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Open the user info store under the configured key.
pub fn open_store(storage_dir: &Path) -> Result<UserInfoStore<FileSlot>> {
    let config = load_config(storage_dir)?;
    Ok(UserInfoStore::with_key(
        FileSlot::new(storage_dir),
        config.storage_key,
    ))
}

/// Whether the slot holds exactly what the store has in memory.
///
/// The store never fails a mutation, so this is how the CLI finds out that a
/// write did not reach disk.
pub fn is_persisted(store: &UserInfoStore<FileSlot>) -> bool {
    match store.slot().read(store.key()) {
        Ok(Some(raw)) => UserInfo::from_json(&raw).ok().as_ref() == Some(store.user_info()),
        Ok(None) => store.user_info().is_empty(),
        Err(_) => false,
    }
}
