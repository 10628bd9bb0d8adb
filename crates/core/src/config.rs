//! Plugin configuration, as passed to `require("promptbook").setup({...})`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{PromptError, Result};
use crate::store::DEFAULT_STORAGE_KEY;

/// Name of the data directory under the platform data dir
pub const APP_DIR: &str = "promptbook";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the collection (and the log file) live
    pub data_dir:    Option<PathBuf>,
    /// Default target directory for exports
    pub export_dir:  Option<PathBuf>,
    /// Storage key of the collection
    pub storage_key: Option<String>,
    /// `tracing` filter directive, e.g. "debug"
    pub log_level:   Option<String>,
}

impl Config {
    /// Parse setup options. `null` means all defaults.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| PromptError::ConfigError(e.to_string()))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or_else(|| PromptError::ConfigError("Could not determine data directory".into()))
    }

    /// Configured export dir, else Downloads, else home, else the working dir
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
