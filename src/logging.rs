//! Log setup.
//!
//! The viewer owns the terminal (raw mode, alternate screen), so logs never go to
//! stdout/stderr. With `ECOSIM_LOG_PATH` set they are appended to that file; without it
//! no subscriber is installed and `tracing` events are discarded.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Filter comes from `RUST_LOG`, default `info`.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;
    Ok(())
}
