//! Commands that edit the saved user info

use std::path::Path;

use anyhow::{bail, Result};
use mnee_checkout_lib::storage::{DurableSlot, FileSlot};
use mnee_checkout_lib::{ContactInfo, ShippingAddress, UserInfoStore};

use crate::ui;

fn report(store: &UserInfoStore<FileSlot>, message: &str) {
    if super::is_persisted(store) {
        ui::success(message);
    } else {
        ui::warning(&format!(
            "{}, but it could not be saved to {}",
            message,
            store.slot().path_for(store.key()).display()
        ));
    }
}

pub fn set_email(storage_dir: &Path, email: String) -> Result<()> {
    if email.trim().is_empty() {
        bail!("Email must not be empty");
    }
    let mut store = super::open_store(storage_dir)?;
    store.set_email(email);
    report(&store, "Email updated");
    Ok(())
}

pub fn set_shipping(storage_dir: &Path, shipping: ShippingAddress) -> Result<()> {
    if shipping == ShippingAddress::default() {
        bail!("Provide at least one address field, e.g. --line1 or --city");
    }
    let mut store = super::open_store(storage_dir)?;
    store.set_shipping(shipping);
    report(&store, "Shipping address updated");
    Ok(())
}

pub fn set_contact(storage_dir: &Path, contact: ContactInfo) -> Result<()> {
    if contact == ContactInfo::default() {
        bail!("Provide at least one of --name, --phone or --email");
    }
    let mut store = super::open_store(storage_dir)?;
    store.set_contact(contact);
    report(&store, "Contact info updated");
    Ok(())
}

pub fn clear(storage_dir: &Path) -> Result<()> {
    let mut store = super::open_store(storage_dir)?;
    // An unreadable or corrupt record loads as empty but still has to go.
    let stored = store.slot().contains(store.key()).unwrap_or(true);
    store.clear_user_info();
    if stored {
        report(&store, "User info cleared");
    } else {
        ui::info("Nothing to clear");
    }
    Ok(())
}
