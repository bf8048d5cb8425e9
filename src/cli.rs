//! Command-line interface for strictly_minimax.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Minimax - play tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File receiving log output (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
