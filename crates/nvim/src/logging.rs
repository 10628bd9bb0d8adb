//! Log file setup
//!
//! Neovim owns stdout/stderr, so `tracing` output goes to
//! `<data_dir>/promptbook.log`. `PROMPTBOOK_LOG` overrides the configured level.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use anyhow::{anyhow, Context};
use promptbook_core::Config;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "promptbook.log";
pub const LOG_ENV: &str = "PROMPTBOOK_LOG";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Install the global subscriber once; later calls return the existing path
pub fn init(config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = config.data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(LOG_PATH.get_or_init(|| path).clone())
}
