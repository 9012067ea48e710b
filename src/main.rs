//! Rewind - terminal tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rewind::{RewindConfig, SortOrder, init_file_logging, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = RewindConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    if cli.descending {
        config = config.with_initial_sort(SortOrder::Descending);
    }

    init_file_logging(&config)?;
    info!(?config, "Configuration resolved");

    run_tui(&config)
}
