//! JSON import and export of the whole collection
//!
//! Export writes `ai-prompts-<date>.json` (pretty-printed array). Import reads
//! the same shape back; only `id`, `title`, `text` and `category` are required
//! per record, and records missing any of them are dropped.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::{ImportError, Result};
use crate::prompt::Prompt;

pub const EXPORT_PREFIX: &str = "ai-prompts-";

/// `ai-prompts-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.json", EXPORT_PREFIX, date.format("%Y-%m-%d"))
}

pub fn export_json(prompts: &[Prompt]) -> Result<String> {
    Ok(serde_json::to_string_pretty(prompts)?)
}

/// Write the export file into `dir`, named after today's UTC date
pub async fn write_export(dir: &Path, prompts: &[Prompt]) -> Result<PathBuf> {
    let json = export_json(prompts)?;
    let path = dir.join(export_file_name(Utc::now().date_naive()));

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, json).await?;

    info!(path = %path.display(), count = prompts.len(), "Exported prompts");
    Ok(path)
}

pub async fn read_import_file(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

/// Records accepted from an import file
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub prompts: Vec<Prompt>,
    pub skipped: usize,
}

impl ImportBatch {
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Found {} valid prompts to import. Add to existing prompts?",
            self.len()
        )
    }
}

/// Parse import file content, keeping only complete records
pub fn parse_import(content: &str) -> std::result::Result<ImportBatch, ImportError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| ImportError::Parse(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ImportError::NotArray);
    };

    let total = items.len();
    let prompts: Vec<Prompt> = items
        .into_iter()
        .map(Prompt::from)
        .filter(Prompt::is_complete)
        .collect();

    if prompts.is_empty() {
        return Err(ImportError::NoValidPrompts);
    }

    let skipped = total - prompts.len();
    if skipped > 0 {
        warn!(skipped, "Some prompts were invalid and not imported");
    }

    Ok(ImportBatch { prompts, skipped })
}
