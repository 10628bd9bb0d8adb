//! Create/edit form state
//!
//! The form is either closed, open for a new prompt, or open on an existing
//! prompt's id. Field values travel as the raw strings the user typed; tags
//! are one comma-separated string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::{Category, Prompt, PromptDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit { id: String },
}

/// Raw form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub title:    String,
    #[serde(default)]
    pub text:     String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags:     String,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Title and prompt text are required")]
    MissingRequired,

    #[error("Please choose a valid category")]
    InvalidCategory,
}

#[derive(Debug, Default)]
pub struct FormController {
    mode:   FormMode,
    fields: FormFields,
}

/// Serializable snapshot handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(flatten)]
    pub mode:    FormMode,
    pub heading: Option<&'static str>,
    pub fields:  FormFields,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self.mode {
            FormMode::Closed => None,
            FormMode::Create => Some("New Prompt"),
            FormMode::Edit { .. } => Some("Edit Prompt"),
        }
    }

    /// Open with cleared fields
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.fields = FormFields {
            category: Category::default().to_string(),
            ..FormFields::default()
        };
    }

    /// Open pre-filled from `prompt`
    pub fn open_edit(&mut self, prompt: &Prompt) {
        // Records from older stores or imports may carry categories the
        // form cannot submit
        let category = match prompt.category.parse::<Category>() {
            Ok(category) => category.to_string(),
            Err(_) => Category::Other.to_string(),
        };

        self.mode = FormMode::Edit {
            id: prompt.id.clone(),
        };
        self.fields = FormFields {
            title: prompt.title.clone(),
            text: prompt.text.clone(),
            category,
            tags: join_tags(&prompt.tags),
        };
    }

    /// Keep what the user typed, e.g. after a rejected submit
    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn close(&mut self) {
        self.mode = FormMode::Closed;
    }

    pub fn state(&self) -> FormState {
        FormState {
            mode:    self.mode.clone(),
            heading: self.heading(),
            fields:  self.fields.clone(),
        }
    }
}

/// Trim and check form input
pub fn validate(fields: &FormFields) -> Result<PromptDraft, FormError> {
    let title = fields.title.trim();
    let text = fields.text.trim();
    if title.is_empty() || text.is_empty() {
        return Err(FormError::MissingRequired);
    }

    let category = fields
        .category
        .parse::<Category>()
        .map_err(|_| FormError::InvalidCategory)?;

    Ok(PromptDraft {
        title: title.to_string(),
        text: text.to_string(),
        category,
        tags: parse_tags(&fields.tags),
    })
}

/// Split a comma-separated tag string, dropping blanks
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
