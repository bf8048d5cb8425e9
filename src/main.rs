//! Strictly Minimax - console tic-tac-toe
//!
//! The human plays X, the computer plays O and never loses.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_minimax::{GameConfig, console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    run_game(&config)
}

/// Sends tracing output to the configured log file so it stays off the board.
///
/// Without a log file no subscriber is installed and nothing touches disk.
fn init_tracing(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Resolves the screen capability, then plays one game on stdin/stdout.
#[instrument(skip_all)]
fn run_game(config: &GameConfig) -> Result<()> {
    let screen = console::ScreenConfig::from_setting(*config.clear_screen())
        .context("Cannot clear the terminal on this platform")?;
    info!(platform = %screen.platform(), method = ?screen.method(), "Screen configured");

    let status = console::run(config, &screen)?;
    info!(?status, "Game finished");

    Ok(())
}
