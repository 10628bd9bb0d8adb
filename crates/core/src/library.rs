//! In-memory prompt collection
//!
//! Ordered newest first. The library only mutates; persisting and re-rendering
//! after a change is the caller's job (see [`crate::app::App`]).

use crate::prompt::{IdGenerator, Prompt, PromptDraft};

#[derive(Debug, Default)]
pub struct Library {
    prompts: Vec<Prompt>,
    ids:     IdGenerator,
}

impl Library {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts,
            ids: IdGenerator::new(),
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Insert a new prompt at the front under a fresh id
    pub fn create(&mut self, draft: PromptDraft) -> &Prompt {
        let prompt = Prompt::from_draft(self.ids.next_id(), draft);
        self.prompts.insert(0, prompt);
        &self.prompts[0]
    }

    /// Replace the editable fields of the prompt with `id`. Returns false and
    /// leaves the collection alone when no such prompt exists.
    pub fn update(&mut self, id: &str, draft: PromptDraft) -> bool {
        match self.prompts.iter_mut().find(|p| p.id == id) {
            Some(prompt) => {
                prompt.apply(draft);
                true
            },
            None => false,
        }
    }

    /// Remove the first prompt with `id`
    pub fn remove(&mut self, id: &str) -> Option<Prompt> {
        let index = self.prompts.iter().position(|p| p.id == id)?;
        Some(self.prompts.remove(index))
    }

    /// Put imported prompts in front of the existing ones, in file order.
    /// Ids are kept as imported.
    pub fn prepend(&mut self, imported: Vec<Prompt>) {
        let existing = std::mem::take(&mut self.prompts);
        self.prompts = imported;
        self.prompts.extend(existing);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::prompt::Category;
    use crate::samples::sample_prompts;

    fn draft(title: &str) -> PromptDraft {
        PromptDraft {
            title:    title.into(),
            text:     format!("{} body", title),
            category: Category::Business,
            tags:     vec!["t".into()],
        }
    }

    #[test]
    fn test_create_prepends_with_fresh_id() {
        let mut library = Library::new(sample_prompts());
        let id = library.create(draft("New")).id.clone();

        assert_eq!(library.len(), 6);
        assert_eq!(library.prompts()[0].id, id);
        assert!(library.prompts()[1..].iter().all(|p| p.id != id));
    }

    #[test]
    fn test_consecutive_creates_get_distinct_ids() {
        let mut library = Library::default();
        let a = library.create(draft("a")).id.clone();
        let b = library.create(draft("b")).id.clone();
        assert_ne!(a, b);
        assert_eq!(library.prompts()[0].title, "b");
    }

    #[test]
    fn test_update_existing() {
        let mut library = Library::new(sample_prompts());
        assert!(library.update("3", draft("Changed")));

        let prompt = library.find("3").unwrap();
        assert_eq!(prompt.title, "Changed");
        assert_eq!(prompt.category, "Business");
        assert_eq!(library.prompts()[2].id, "3");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut library = Library::new(sample_prompts());
        assert!(!library.update("nope", draft("Changed")));
        assert_eq!(library.prompts(), sample_prompts().as_slice());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut library = Library::new(sample_prompts());
        let mut duplicates = sample_prompts();
        duplicates.truncate(1);
        library.prepend(duplicates);
        assert_eq!(library.len(), 6);

        let removed = library.remove("1").unwrap();
        assert_eq!(removed.id, "1");
        assert_eq!(library.len(), 5);
        assert!(library.find("1").is_some());
        assert!(library.remove("missing").is_none());
    }

    #[test]
    fn test_prepend_keeps_order() {
        let mut library = Library::new(sample_prompts());
        let mut incoming = sample_prompts();
        incoming.reverse();
        library.prepend(incoming);

        let ids: Vec<&str> = library.prompts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["5", "4", "3", "2", "1", "1", "2", "3", "4", "5"]);
    }

    proptest! {
        #[test]
        fn prop_create_then_find_returns_input(
            title in "[a-zA-Z0-9 ]{1,24}",
            text in "[a-zA-Z0-9 ]{1,48}",
            tags in proptest::collection::vec("[a-z]{1,8}", 0..4),
        ) {
            let mut library = Library::new(sample_prompts());
            let input = PromptDraft { title, text, category: Category::Other, tags };
            let id = library.create(input.clone()).id.clone();

            let found = library.find(&id).unwrap();
            prop_assert!(!found.id.is_empty());
            prop_assert_eq!(found, &Prompt::from_draft(id.clone(), input));
        }
    }
}
