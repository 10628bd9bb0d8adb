//! Persistence of the prompt collection
//!
//! The whole collection lives as one JSON array under a single key of a
//! [`KeyValueStore`]. [`PromptStore`] wraps a backend with the recovery rules:
//! loading never fails (missing or corrupt data falls back to the built-in
//! samples) and saving reports failures as a toast instead of an error.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::errors::{PromptError, Result};
use crate::notify::Toast;
use crate::prompt::Prompt;
use crate::samples::sample_prompts;
use crate::ui::Ui;

/// Key the collection is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "aiPrompts";

/// Minimal string key/value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ============================================================================
// Backends
// ============================================================================

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PromptError::StorageError(format!("Failed to read '{}': {}", key, e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let path = self.path_for(key);
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, value)?;
            if let Err(e) = fs::rename(&tmp, &path) {
                let _ = fs::remove_file(&tmp);
                return Err(e);
            }
            Ok(())
        };

        write().map_err(|e| PromptError::StorageError(format!("Failed to write '{}': {}", key, e)))
    }
}

/// In-memory backend. `set_failing(true)` makes every write fail, like a
/// full browser quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values:  HashMap<String, String>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            return Err(PromptError::StorageError("quota exceeded".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Adapter
// ============================================================================

pub struct PromptStore {
    backend: Box<dyn KeyValueStore>,
    key:     String,
}

impl PromptStore {
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored value, if any
    pub fn raw(&self) -> Result<Option<String>> {
        self.backend.get(&self.key)
    }

    /// Load the collection. Seeds and persists the samples when nothing is
    /// stored, or when the stored value is unreadable or not an array.
    pub fn load(&mut self, ui: &mut dyn Ui) -> Vec<Prompt> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = %self.key, "Error loading prompts: {}", e);
                return self.reseed(ui);
            },
        };

        let Some(raw) = raw else {
            debug!(key = %self.key, "No stored prompts, seeding samples");
            return self.reseed(ui);
        };

        match serde_json::from_str::<Vec<Prompt>>(&raw) {
            Ok(prompts) => {
                debug!(count = prompts.len(), "Loaded prompts");
                prompts
            },
            Err(e) => {
                error!(key = %self.key, "Error loading prompts: invalid stored value: {}", e);
                self.reseed(ui)
            },
        }
    }

    /// Persist the collection. Failures become an error toast; returns whether
    /// the write went through.
    pub fn save(&mut self, prompts: &[Prompt], ui: &mut dyn Ui) -> bool {
        match self.try_save(prompts) {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.key, "Error saving prompts: {}", e);
                ui.notify(Toast::error("Error saving prompts"));
                false
            },
        }
    }

    fn try_save(&mut self, prompts: &[Prompt]) -> Result<()> {
        let json = serde_json::to_string(prompts)?;
        self.backend.set(&self.key, &json)
    }

    fn reseed(&mut self, ui: &mut dyn Ui) -> Vec<Prompt> {
        let prompts = sample_prompts();
        self.save(&prompts, ui);
        prompts
    }
}
