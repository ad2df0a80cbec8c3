//! Noughts - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Config, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::load_or_default(&cli.config)?);

    // Log to a file so output never lands on the alternate screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = %cli.config.display(), "Starting noughts");
    run_tui(&config)
}
