//! Wallets command - list the connect options the widget would render

use std::path::Path;

use anyhow::Result;
use mnee_checkout_lib::wallet::shorten_address;

use crate::ui;

pub fn run(storage_dir: &Path, address: Option<&str>) -> Result<()> {
    let wallet_config = super::load_config(storage_dir)?.wallet_config();

    ui::header("Enabled Wallets");
    if wallet_config.enabled_wallets.is_empty() {
        ui::info("No wallet providers enabled");
    }
    for provider in &wallet_config.enabled_wallets {
        ui::key_value(provider.as_str(), provider.display_name());
    }

    let affordances = wallet_config.affordances();
    if !affordances.is_empty() {
        ui::header("Connect Options");
        for affordance in affordances {
            println!("  {}", affordance.label());
        }
    }

    if let Some(address) = address {
        ui::header("Connected As");
        ui::key_value("Address", &shorten_address(address));
    }

    Ok(())
}
