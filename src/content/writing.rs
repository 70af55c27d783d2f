use super::store::ContentStore;
use crate::types::language::{LanguageCode, LessonNumber};

pub const WRITING_TIPS: &[&str] = &[
    "Try to use as many words from this lesson's vocabulary as possible.",
    "Focus on the grammar points covered in this lesson.",
    "Start with simple sentences and gradually build more complex ones.",
    "Don't worry about making mistakes, they're part of the learning process!",
    "Save your writing to track your progress over time.",
];

pub fn resolve_prompts(store: &ContentStore, lang: LanguageCode, lesson: LessonNumber) -> Vec<String> {
    if let Some(prompts) = store.writing_prompts(lang, lesson) {
        return prompts.to_vec();
    }
    let name = lang.name();
    vec![
        format!("Describe yourself using {name} vocabulary from this lesson."),
        format!("Write about your day using {name} words you've learned."),
        format!("Create a short story using at least 10 {name} words from this lesson."),
        format!("Describe your favorite place using {name} vocabulary."),
        format!("Write a dialogue between two people using {name} greetings and basic phrases."),
    ]
}
