//! # ponder-host
//!
//! A standalone host for exercising Ponder plugin services from a terminal.
//!
//! The host:
//! - Loads configuration and installs logging
//! - Opens the SQLite store and restores the plugin's entities
//! - Schedules the hourly autosave
//! - Reads console commands from stdin (`save`, `color <name>`)
//! - Saves once more on Ctrl+C or end of input
//!
//! ## Configuration
//!
//! The host reads configuration from `$XDG_CONFIG_HOME/ponder/config.toml`,
//! writing a documented default file on first start.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin ponder-host
//!
//! # With debug logging
//! RUST_LOG=debug cargo run --bin ponder-host
//! ```

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use ponder_core::Snapshot;
use ponder_host::commands::CommandSender;
use ponder_host::config::{Config, ConfigService};
use ponder_host::logging;
use ponder_host::registry::ServiceRegistry;
use ponder_host::scheduler::TokioTimer;
use ponder_host::storage::SqliteRecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    let (config_service, config_error) = match ConfigService::load_default() {
        Ok(service) => (service, None),
        Err(e) => (ConfigService::new(Config::default()), Some(e)),
    };

    logging::init(&config_service.config().plugin.log_level)?;
    info!("Starting ponder-host v{}", env!("CARGO_PKG_VERSION"));

    match (config_error, config_service.path()) {
        (Some(e), _) => warn!("Failed to load config, using defaults: {:#}", e),
        (None, Some(path)) => info!("Loaded configuration from {}", path.display()),
        (None, None) => {}
    }

    let config = config_service.config().clone();

    let storage_path = config.storage_path()?;
    info!("Initializing storage at: {}", storage_path.display());
    let store = SqliteRecordStore::open_at(&storage_path)?.collection(config.plugin.name.as_str());

    let mut services: ServiceRegistry<Snapshot> = ServiceRegistry::new(
        config_service,
        Arc::new(store),
        Arc::new(TokioTimer::current()?),
    );

    let restored = services.storage_service().load()?;
    info!("Restored {} record(s) for '{}'", restored, services.plugin_name());

    services.register_builtin_commands();
    services.start_autosave();

    info!(
        "Host startup complete, commands: {}",
        services.command_interpreter().command_names().join(", ")
    );
    info!("Press Ctrl+C to stop");

    let console = CommandSender::console();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                if args.is_empty() {
                    continue;
                }

                match services.command_interpreter().interpret(&console, &args).await {
                    Ok(output) => output.iter().for_each(|line| info!("{}", line)),
                    Err(e) => warn!("{}", e),
                }
            }
        }
    }

    info!("Shutting down...");
    let report = services.shutdown()?;
    info!("Saved {} record(s) on shutdown", report.saved);

    info!("Host stopped");
    Ok(())
}
