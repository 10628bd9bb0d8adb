//! Display model for the prompt list
//!
//! [`render`] is pure: it turns a slice of prompts into a [`View`] that the
//! host draws (Lua receives it as JSON, `:PromptBook` prints [`View::to_lines`]).

use serde::Serialize;

use crate::prompt::Prompt;

pub const ERROR_MESSAGE: &str = "Error loading prompts. Please refresh.";
pub const EMPTY_MESSAGE: &str = "No prompts found. Create your first prompt!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum View {
    Error { message: String },
    Empty { message: String },
    Cards { cards: Vec<Card> },
}

/// One rendered prompt with its edit/delete action keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id:       String,
    pub category: String,
    pub title:    String,
    pub text:     String,
    pub tags:     Vec<String>,
    pub edit:     String,
    pub delete:   String,
}

impl Card {
    fn new(prompt: &Prompt) -> Self {
        Self {
            id:       prompt.id.clone(),
            category: prompt.category.clone(),
            title:    prompt.title.clone(),
            text:     prompt.text.clone(),
            tags:     prompt.tags.clone(),
            edit:     format!("edit:{}", prompt.id),
            delete:   format!("delete:{}", prompt.id),
        }
    }
}

/// Render a list of prompts. `None` stands for a collection that could not be
/// produced at all. Incomplete records are skipped.
pub fn render(prompts: Option<&[Prompt]>) -> View {
    let Some(prompts) = prompts else {
        return View::Error {
            message: ERROR_MESSAGE.to_string(),
        };
    };

    if prompts.is_empty() {
        return View::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    View::Cards {
        cards: prompts
            .iter()
            .filter(|p| p.is_complete())
            .map(Card::new)
            .collect(),
    }
}

impl View {
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Cards { cards } => cards,
            _ => &[],
        }
    }

    /// Plain-text listing, one block per card
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            View::Error { message } | View::Empty { message } => vec![message.clone()],
            View::Cards { cards } => {
                let mut lines = Vec::new();
                for card in cards {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(format!("[{}] {}  ({})", card.category, card.title, card.id));
                    lines.extend(card.text.lines().map(|l| format!("  {}", l)));
                    if !card.tags.is_empty() {
                        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{}", t)).collect();
                        lines.push(format!("  {}", tags.join(" ")));
                    }
                }
                lines
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::samples::sample_prompts;

    #[test]
    fn test_render_none_is_error() {
        assert_eq!(
            render(None),
            View::Error {
                message: ERROR_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_render_empty_has_call_to_action() {
        match render(Some(Vec::new().as_slice())) {
            View::Empty { message } => assert!(message.contains("Create your first prompt")),
            other => panic!("Expected Empty, got {:?}", other),
        }
    }

    #[test]
    fn test_render_cards_in_order_with_actions() {
        let samples = sample_prompts();
        let view = render(Some(samples.as_slice()));
        let cards = view.cards();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[1].title, "Python Code Debugger");
        assert_eq!(cards[1].edit, "edit:2");
        assert_eq!(cards[1].delete, "delete:2");
        assert_eq!(cards[1].tags, vec!["python", "debugging", "coding"]);
    }

    #[test]
    fn test_render_skips_incomplete_records() {
        let mut prompts = sample_prompts();
        prompts.insert(1, serde_json::from_value(json!({"title": "orphan"})).unwrap());
        prompts.push(serde_json::from_value(json!({"id": "x", "title": "T", "text": ""})).unwrap());

        let view = render(Some(prompts.as_slice()));
        assert_eq!(view.cards().len(), 5);
        assert!(view.cards().iter().all(|c| c.title != "orphan"));
    }

    #[test]
    fn test_render_all_incomplete_is_empty_card_list() {
        let prompts: Vec<Prompt> = vec![serde_json::from_value(json!({})).unwrap()];
        assert_eq!(render(Some(prompts.as_slice())), View::Cards { cards: vec![] });
    }

    #[test]
    fn test_render_does_not_touch_input() {
        let samples = sample_prompts();
        let _ = render(Some(samples.as_slice()));
        assert_eq!(samples, sample_prompts());
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let value = serde_json::to_value(render(Some(Vec::new().as_slice()))).unwrap();
        assert_eq!(value["kind"], "empty");
        assert_eq!(value["message"], EMPTY_MESSAGE);
    }

    #[test]
    fn test_to_lines() {
        let samples = sample_prompts();
        let lines = render(Some(&samples[1..2])).to_lines();
        assert_eq!(lines[0], "[Technical] Python Code Debugger  (2)");
        assert_eq!(lines.last().unwrap(), "  #python #debugging #coding");

        assert_eq!(render(None).to_lines(), vec![ERROR_MESSAGE.to_string()]);
    }
}
