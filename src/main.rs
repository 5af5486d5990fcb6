//! Inventory tracker: a role-gated product catalog behind a text menu.
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive session (log in as admin/admin123 or user/user123)
//! inventory
//!
//! # Flag products at or below 3 units as low stock
//! inventory --low-stock-threshold 3
//!
//! # Show request-level diagnostics on stderr
//! RUST_LOG=debug inventory
//! ```

mod domain;
mod clients;
mod app_system;
mod auth;
mod config;
mod console;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod product_actor;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{setup_tracing, InventorySystem};
use crate::config::InventoryConfig;
use crate::console::Console;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version, about = "Interactive inventory tracker")]
struct Cli {
    /// Stock level at or below which a product is flagged as low
    #[arg(long)]
    low_stock_threshold: Option<u32>,

    /// Capacity of the catalog actor's request queue
    #[arg(long)]
    channel_buffer: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Inventory session failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = InventoryConfig::from_env()?.with_overrides(cli.low_stock_threshold, cli.channel_buffer)?;
    let system = InventorySystem::new(&config);

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let session = console.run(&system.auth_store, &system.catalog_client).await;

    // Shutdown even if the session failed, then report the first error
    system.shutdown().await?;
    session?;

    info!("Application completed successfully");
    Ok(())
}
