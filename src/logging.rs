//! Tracing setup.
//!
//! The terminal belongs to the game screen, so logs go to a file.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::RewindConfig;

/// Installs a file-backed subscriber.
///
/// `RUST_LOG` wins over the configured filter. Safe to call twice; the
/// second call leaves the first subscriber in place.
pub fn init_file_logging(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
