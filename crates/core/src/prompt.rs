//! Prompt record, category set and id generation

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PromptError;

/// A single prompt in the library.
///
/// Deserialization is lenient: any JSON value becomes a `Prompt`, with missing
/// or mistyped fields left empty. Callers decide whether an incomplete record
/// is usable (see [`Prompt::is_complete`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Prompt {
    pub id:       String,
    pub title:    String,
    pub text:     String,
    pub category: String,
    pub tags:     Vec<String>,
    /// Fields this version does not know about, kept for round trips
    #[serde(flatten)]
    pub extra:    Map<String, Value>,
}

/// Validated form data for creating or updating a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDraft {
    pub title:    String,
    pub text:     String,
    pub category: Category,
    pub tags:     Vec<String>,
}

impl Prompt {
    /// Build a new record from a draft under a freshly generated id
    pub fn from_draft(id: String, draft: PromptDraft) -> Self {
        Self {
            id,
            title: draft.title,
            text: draft.text,
            category: draft.category.to_string(),
            tags: draft.tags,
            extra: Map::new(),
        }
    }

    /// Overwrite every editable field with the draft. The id and any unknown
    /// fields stay as they were.
    pub fn apply(&mut self, draft: PromptDraft) {
        self.title = draft.title;
        self.text = draft.text;
        self.category = draft.category.to_string();
        self.tags = draft.tags;
    }

    /// True when id, title, text and category are all non-empty
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty()
            && !self.title.is_empty()
            && !self.text.is_empty()
            && !self.category.is_empty()
    }
}

impl From<Value> for Prompt {
    fn from(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let id = text_field(map.remove("id"));
        let title = text_field(map.remove("title"));
        let text = text_field(map.remove("text"));
        let category = text_field(map.remove("category"));
        let tags = match map.remove("tags") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id,
            title,
            text,
            category,
            tags,
            extra: map,
        }
    }
}

/// Coerce a JSON field into text. Strings pass through, non-zero numbers are
/// stringified, everything else counts as absent.
fn text_field(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

// ============================================================================
// Category
// ============================================================================

/// The fixed set of categories the form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Creative,
    Technical,
    Business,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Creative,
        Category::Technical,
        Category::Business,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creative => "Creative",
            Category::Technical => "Technical",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    /// First option of the category selector
    fn default() -> Self {
        Category::Creative
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PromptError::ValidationError(format!("Unknown category: {}", s)))
    }
}

// ============================================================================
// Id generation
// ============================================================================

/// Time-derived, strictly increasing prompt ids
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id from the wall clock (Unix milliseconds)
    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time. Never repeats, even if the clock
    /// stalls or steps backwards.
    pub fn next_id_at(&mut self, now_millis: i64) -> String {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}
