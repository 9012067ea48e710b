//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Terminal tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,
}
