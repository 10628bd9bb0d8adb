//! Built-in prompts seeded on first run or when the store is corrupt

use serde_json::Map;

use crate::prompt::Prompt;

fn sample(id: &str, title: &str, text: &str, category: &str, tags: &[&str]) -> Prompt {
    Prompt {
        id:       id.to_string(),
        title:    title.to_string(),
        text:     text.to_string(),
        category: category.to_string(),
        tags:     tags.iter().map(|t| t.to_string()).collect(),
        extra:    Map::new(),
    }
}

/// The five sample prompts, in display order
pub fn sample_prompts() -> Vec<Prompt> {
    vec![
        sample(
            "1",
            "Creative Story Starter",
            "Write a short story about a time traveler who accidentally changes one small event \
             in the past and returns to find the present completely altered. Focus on the \
             emotional impact of seeing familiar people and places transformed.",
            "Creative",
            &["fiction", "time travel", "emotional"],
        ),
        sample(
            "2",
            "Python Code Debugger",
            "I have this Python code that's not working as expected: [paste code here]. Can you \
             analyze it, explain what's wrong, and provide a corrected version with comments \
             explaining the changes?",
            "Technical",
            &["python", "debugging", "coding"],
        ),
        sample(
            "3",
            "Business Email Draft",
            "Compose a professional email to a client explaining that their project deadline \
             needs to be extended by two weeks due to unforeseen circumstances. The tone should \
             be apologetic but confident, emphasizing our commitment to quality and offering a \
             small discount or bonus for the inconvenience.",
            "Business",
            &["communication", "client relations"],
        ),
        sample(
            "4",
            "Science Lesson Plan",
            "Create a 45-minute lesson plan for 8th grade students about photosynthesis. Include \
             an engaging opening activity, clear explanations of key concepts, a hands-on \
             experiment or demonstration, and a formative assessment to check for understanding.",
            "Education",
            &["teaching", "biology", "lesson planning"],
        ),
        sample(
            "5",
            "Fitness Motivation",
            "I'm struggling to stay motivated with my workout routine. Generate a personalized \
             pep talk that addresses common excuses (too tired, not enough time, not seeing \
             results) and provides practical strategies to overcome each one, tailored to \
             someone with a busy office job.",
            "Other",
            &["health", "motivation", "self-improvement"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_complete_samples_in_order() {
        let samples = sample_prompts();
        let ids: Vec<&str> = samples.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert!(samples.iter().all(Prompt::is_complete));
    }

    #[test]
    fn test_sample_text_has_no_line_continuation_gaps() {
        for prompt in sample_prompts() {
            assert!(!prompt.text.contains("  "), "{}", prompt.title);
        }
    }
}
