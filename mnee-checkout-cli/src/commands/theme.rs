//! Theme command - resolve a preference against a given system appearance

use std::path::Path;

use anyhow::{Context, Result};
use mnee_checkout_lib::theme::{ManualAppearance, Theme, ThemePreference, ThemeWatcher};

use crate::ui;

pub fn run(storage_dir: &Path, preference: &str, system: Theme, save: bool) -> Result<()> {
    let preference: ThemePreference = preference
        .parse()
        .with_context(|| format!("Unknown theme preference '{}'", preference))?;

    let watcher = ThemeWatcher::new(preference, ManualAppearance::new(system));

    ui::header("Theme");
    ui::key_value("Preference", preference.as_str());
    ui::key_value("System", system.as_str());
    ui::key_value("Resolved", watcher.theme().as_str());

    if save {
        let config = super::load_config(storage_dir)?.with_theme(preference);
        super::save_config(storage_dir, &config)?;
        ui::success(&format!(
            "Saved theme preference to {}",
            super::config_path(storage_dir).display()
        ));
    }

    Ok(())
}
