//! Search and category filtering

use serde::{Deserialize, Serialize};

use crate::prompt::Prompt;

/// Current search box and category selector values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub search:   String,
    #[serde(default)]
    pub category: String,
}

impl Query {
    pub fn apply(&self, prompts: &[Prompt]) -> Vec<Prompt> {
        filter(prompts, &self.search, &self.category)
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty()
    }
}

/// Prompts in `category` (exact match) whose title, text or any tag contains
/// `search`, ignoring case. Empty arguments match everything.
pub fn filter(prompts: &[Prompt], search: &str, category: &str) -> Vec<Prompt> {
    let needle = search.to_lowercase();

    prompts
        .iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .cloned()
        .collect()
}

fn matches_search(prompt: &Prompt, needle: &str) -> bool {
    let contains = |field: &str| !field.is_empty() && field.to_lowercase().contains(needle);

    contains(prompt.title.as_str())
        || contains(prompt.text.as_str())
        || prompt.tags.iter().any(|t| contains(t.as_str()))
}
