//! Ventas CLI - Drive the catalog and cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the product grid
//! ventas catalog --file crates/cli/data/productos.yaml
//!
//! # Add products (ID or IDxQUANTITY) and print the order link
//! ventas order --file crates/cli/data/productos.yaml --add 1x2 --add 4
//!
//! # Print the order message without sending
//! ventas order --file crates/cli/data/productos.yaml --add 1x2 --preview
//! ```
//!
//! # Commands
//!
//! - `catalog` - Show every product with its formatted price
//! - `order` - Fill a cart and emit the order link
//!
//! Configuration comes from the environment; see [`config`].
//! Logs go to stderr so stdout carries only command output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::order::AddSpec;
use config::VentasConfig;

#[derive(Parser)]
#[command(name = "ventas")]
#[command(author, version, about = "Ventas catalog and order tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products in a catalog file
    Catalog {
        /// Catalog file (.json, .yaml or .yml)
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Add products to a cart and send the order
    Order {
        /// Catalog file (.json, .yaml or .yml)
        #[arg(short, long)]
        file: PathBuf,

        /// Product to add, as `ID` or `IDxQUANTITY` (repeatable)
        #[arg(short, long = "add", value_name = "ID[xQTY]")]
        adds: Vec<AddSpec>,

        /// Print the order message instead of sending it
        #[arg(long)]
        preview: bool,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ventas_cli=info,ventas_core=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = VentasConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Catalog { file } => commands::catalog::list(&file, &config)?,
        Commands::Order {
            file,
            adds,
            preview,
        } => commands::order::run(&file, &adds, preview, &config)?,
    }
    Ok(())
}
