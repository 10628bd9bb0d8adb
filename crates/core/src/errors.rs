//! Error types for promptbook
//!
//! This module defines error types that cross the Rust/Lua boundary, so every
//! variant carries a message that is fit to show in a Neovim notification.

use thiserror::Error;

/// Result type alias for promptbook operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Main error type for promptbook
#[derive(Debug, Error)]
pub enum PromptError {
    /// Command not found in registry
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid command arguments
    #[error("Invalid arguments for command '{command}': {reason}")]
    InvalidArgs { command: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Key/value backend failure (read or write)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Import file rejected
    #[error("Import failed: {0}")]
    ImportError(#[from] ImportError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// No prompt with the given id
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

/// Reasons an import file is rejected as a whole
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// Content is not JSON at all
    #[error("{0}")]
    Parse(String),

    /// JSON, but not an array
    #[error("File should contain an array of prompts")]
    NotArray,

    /// Array without a single record carrying id, title, text and category
    #[error("No valid prompts found in the file")]
    NoValidPrompts,
}

impl PromptError {
    /// Get user-friendly error message for display in Neovim
    pub fn user_message(&self) -> String {
        match self {
            PromptError::CommandNotFound(cmd) => {
                format!(
                    "Command '{}' not found. Run :PromptBook to open the prompt list.",
                    cmd
                )
            },
            PromptError::InvalidArgs { command, reason } => {
                format!("Invalid arguments for '{}': {}", command, reason)
            },
            PromptError::ImportError(err) => format!("Import failed: {}", err),
            PromptError::StorageError(_) => "Error saving prompts".to_string(),
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            PromptError::CommandNotFound(_) => "command",
            PromptError::InvalidArgs { .. } => "arguments",
            PromptError::SerdeError(_) => "serialization",
            PromptError::IoError(_) => "io",
            PromptError::StorageError(_) => "storage",
            PromptError::ImportError(_) => "import",
            PromptError::ConfigError(_) => "config",
            PromptError::ValidationError(_) => "validation",
            PromptError::NotFound(_) => "not_found",
            PromptError::Other(_) => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PromptError::CommandNotFound("prompts.frobnicate".to_string());
        assert_eq!(err.to_string(), "Command not found: prompts.frobnicate");
    }

    #[test]
    fn test_user_message() {
        let err = PromptError::CommandNotFound("prompts.frobnicate".to_string());
        assert!(err.user_message().contains("prompts.frobnicate"));
        assert!(err.user_message().contains("PromptBook"));
    }

    #[test]
    fn test_import_error_messages() {
        let err: PromptError = ImportError::NotArray.into();
        assert_eq!(
            err.user_message(),
            "Import failed: File should contain an array of prompts"
        );

        let err: PromptError = ImportError::NoValidPrompts.into();
        assert_eq!(err.to_string(), "Import failed: No valid prompts found in the file");
    }

    #[test]
    fn test_storage_error_hides_backend_detail() {
        let err = PromptError::StorageError("quota exceeded".into());
        assert_eq!(err.user_message(), "Error saving prompts");
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            PromptError::CommandNotFound("test".to_string()).category(),
            "command"
        );
        assert_eq!(
            PromptError::InvalidArgs {
                command: "test".to_string(),
                reason:  "bad".to_string(),
            }
            .category(),
            "arguments"
        );
        assert_eq!(PromptError::from(ImportError::NotArray).category(), "import");
    }
}
