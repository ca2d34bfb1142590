//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so `tracing` output goes to a daily file
//! named `mousewatch_<date>.log` in the configured log directory (default:
//! `~/.local/share/mousewatch/logs/`). When logging is disabled no subscriber
//! is installed and every `tracing` macro is a no-op.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path when enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("Starting mousewatch v{}", env!("CARGO_PKG_VERSION"));
    Ok(Some(path))
}

fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("mousewatch_{}.log", date.format("%Y-%m-%d"))
}
