//! Show command - print the saved user info

use std::path::Path;

use anyhow::Result;

use crate::ui;

pub fn run(storage_dir: &Path, json: bool) -> Result<()> {
    let store = super::open_store(storage_dir)?;
    let info = store.user_info();

    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
        return Ok(());
    }

    if info.is_empty() {
        ui::info("No user info saved");
        ui::info("Run 'mnee-checkout set-email <email>' to add some");
        return Ok(());
    }

    ui::header("User Info");
    ui::optional("Email", info.email.as_deref());

    if let Some(shipping) = &info.shipping {
        ui::header("Shipping");
        ui::optional("Name", shipping.name.as_deref());
        ui::optional("Line 1", shipping.line1.as_deref());
        ui::optional("Line 2", shipping.line2.as_deref());
        ui::optional("City", shipping.city.as_deref());
        ui::optional("State", shipping.state.as_deref());
        ui::optional("Postal code", shipping.postal_code.as_deref());
        ui::optional("Country", shipping.country.as_deref());
        for (key, value) in &shipping.extra {
            ui::key_value(key, &value.to_string());
        }
    }

    if let Some(contact) = &info.contact {
        ui::header("Contact");
        ui::optional("Name", contact.name.as_deref());
        ui::optional("Phone", contact.phone.as_deref());
        ui::optional("Email", contact.email.as_deref());
        for (key, value) in &contact.extra {
            ui::key_value(key, &value.to_string());
        }
    }

    Ok(())
}
