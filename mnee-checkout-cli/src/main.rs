//! MNEE Checkout CLI
//!
//! Inspect and edit the buyer details the checkout widget remembers, using the
//! same record format and storage key as the browser build.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mnee_checkout_lib::Theme;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "mnee-checkout")]
#[command(about = "MNEE Checkout CLI - Manage saved checkout details", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true, env = "MNEE_CHECKOUT_DIR")]
    storage_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the saved user info
    Show {
        /// Print the raw stored JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the buyer's email
    SetEmail {
        email: String,
    },

    /// Replace the saved shipping address
    SetShipping {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        line1: Option<String>,

        #[arg(long)]
        line2: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        #[arg(long)]
        country: Option<String>,
    },

    /// Replace the saved contact info
    SetContact {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Erase all saved user info
    Clear,

    /// Resolve a theme preference (light, dark or auto)
    Theme {
        preference: String,

        /// System appearance used to resolve `auto`
        #[arg(long, value_enum, default_value_t = SystemAppearance::Light)]
        system: SystemAppearance,

        /// Store the preference in checkout.json
        #[arg(long)]
        save: bool,
    },

    /// List the wallet providers offered at checkout
    Wallets {
        /// Show how a connected address would be displayed
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SystemAppearance {
    Light,
    Dark,
}

impl From<SystemAppearance> for Theme {
    fn from(appearance: SystemAppearance) -> Self {
        match appearance {
            SystemAppearance::Light => Theme::Light,
            SystemAppearance::Dark => Theme::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("mnee_checkout_cli=debug,mnee_checkout_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("mnee_checkout_cli=info,mnee_checkout_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    // Setup storage directory
    let storage_dir = cli.storage_dir.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mnee-checkout")
    });
    tracing::debug!(dir = %storage_dir.display(), "using storage directory");

    // Dispatch commands
    match cli.command {
        Commands::Show { json } => {
            commands::show::run(&storage_dir, json)?;
        }
        Commands::SetEmail { email } => {
            commands::user_info::set_email(&storage_dir, email)?;
        }
        Commands::SetShipping {
            name,
            line1,
            line2,
            city,
            state,
            postal_code,
            country,
        } => {
            let shipping = mnee_checkout_lib::ShippingAddress {
                name,
                line1,
                line2,
                city,
                state,
                postal_code,
                country,
                ..Default::default()
            };
            commands::user_info::set_shipping(&storage_dir, shipping)?;
        }
        Commands::SetContact { name, phone, email } => {
            let contact = mnee_checkout_lib::ContactInfo {
                name,
                phone,
                email,
                ..Default::default()
            };
            commands::user_info::set_contact(&storage_dir, contact)?;
        }
        Commands::Clear => {
            commands::user_info::clear(&storage_dir)?;
        }
        Commands::Theme {
            preference,
            system,
            save,
        } => {
            commands::theme::run(&storage_dir, &preference, system.into(), save)?;
        }
        Commands::Wallets { address } => {
            commands::wallets::run(&storage_dir, address.as_deref())?;
        }
    }

    Ok(())
}
