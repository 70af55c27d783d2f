use regex::Regex;
use std::sync::OnceLock;

use super::store::ContentStore;
use crate::types::content::{
    BlankExercise, ExampleSentence, GrammarLesson, GrammarMaterial, GrammarTopic, WordForWord,
};
use crate::types::language::{LanguageCode, LessonNumber};

pub const MIN_EXAMPLES: usize = 10;
pub const MIN_BLANKS: usize = 20;
pub const MIN_WORD_FOR_WORD: usize = 20;
pub const MIN_TOPIC_EXERCISES: usize = 20;

/// Builds the grammar page of a lesson, padding every section up to its
/// minimum length with templated entries.
pub fn resolve_grammar(store: &ContentStore, lang: LanguageCode, lesson: LessonNumber) -> GrammarLesson {
    let topic = GrammarTopic::for_lesson(lesson);
    let material = store
        .grammar_material(lang, topic)
        .cloned()
        .unwrap_or_else(GrammarMaterial::default);
    let name = lang.name();

    let mut examples = material.examples;
    while examples.len() < MIN_EXAMPLES {
        let n = examples.len() + 1;
        examples.push(ExampleSentence {
            original: format!("Example sentence {n} in {name}."),
            translation: format!("English translation of example {n}."),
        });
    }

    let mut blanks = material.blanks;
    while blanks.len() < MIN_BLANKS {
        let n = blanks.len() + 1;
        blanks.push(BlankExercise {
            sentence: format!("Fill in the blank exercise {n} in {name}: ___."),
            answer: "answer".to_string(),
            translation: format!("English translation of exercise {n}."),
        });
    }

    let mut word_for_word = material.word_for_word;
    while word_for_word.len() < MIN_WORD_FOR_WORD {
        let n = word_for_word.len() + 1;
        word_for_word.push(WordForWord {
            original: format!("Example sentence {n} in {name}."),
            literal: format!("Word for word translation of example {n}."),
        });
    }

    let mut topic_exercises = material.topic_exercises;
    while topic_exercises.len() < MIN_TOPIC_EXERCISES {
        let n = topic_exercises.len() + 1;
        topic_exercises.push(BlankExercise {
            sentence: format!("Grammar exercise {n} in {name}: _____."),
            answer: "answer".to_string(),
            translation: format!("English translation of grammar exercise {n}."),
        });
    }

    GrammarLesson {
        topic,
        examples,
        blanks,
        word_for_word,
        topic_exercises,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentencePart<'a> {
    Text(&'a str),
    Blank,
}

fn blank_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_{3,}").expect("static pattern"))
}

/// Splits an exercise sentence around its blanks (three or more underscores).
pub fn split_blanks(sentence: &str) -> Vec<SentencePart<'_>> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in blank_marker().find_iter(sentence) {
        if m.start() > last {
            parts.push(SentencePart::Text(&sentence[last..m.start()]));
        }
        parts.push(SentencePart::Blank);
        last = m.end();
    }
    if last < sentence.len() {
        parts.push(SentencePart::Text(&sentence[last..]));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(n: u32) -> LessonNumber {
        LessonNumber::new(n).unwrap()
    }

    #[test]
    fn authored_examples_come_first() {
        let store = ContentStore::builtin();
        let grammar = resolve_grammar(&store, LanguageCode::Dutch, lesson(1));
        assert_eq!(grammar.topic, GrammarTopic::PresentTense);
        assert_eq!(grammar.examples[0].original, "Ik ga naar de winkel.");
        assert_eq!(grammar.examples.len(), MIN_EXAMPLES);
        assert_eq!(grammar.blanks[0].answer, "ga");
        assert_eq!(grammar.blanks.len(), MIN_BLANKS);
        assert_eq!(grammar.blanks[5].sentence, "Fill in the blank exercise 6 in Dutch: ___.");
        assert_eq!(grammar.word_for_word[3].original, "Example sentence 4 in Dutch.");
    }

    #[test]
    fn sections_are_padded_for_unauthored_topics() {
        let store = ContentStore::builtin();
        let grammar = resolve_grammar(&store, LanguageCode::Spanish, lesson(3));
        assert_eq!(grammar.topic, GrammarTopic::PastContinuous);
        assert_eq!(grammar.examples.len(), MIN_EXAMPLES);
        assert_eq!(grammar.topic_exercises.len(), MIN_TOPIC_EXERCISES);
        assert_eq!(grammar.examples[0].original, "Example sentence 1 in Spanish.");
    }

    #[test]
    fn present_perfect_lesson_uses_topic_exercises() {
        let store = ContentStore::builtin();
        let grammar = resolve_grammar(&store, LanguageCode::Dutch, lesson(5));
        assert_eq!(grammar.topic, GrammarTopic::PresentPerfect);
        assert_eq!(grammar.topic_exercises[2].answer, "gisteren");
    }

    #[test]
    fn split_handles_both_marker_lengths() {
        assert_eq!(
            split_blanks("Ik ___ naar huis."),
            vec![SentencePart::Text("Ik "), SentencePart::Blank, SentencePart::Text(" naar huis.")]
        );
        assert_eq!(
            split_blanks("Ik heb een film _____."),
            vec![SentencePart::Text("Ik heb een film "), SentencePart::Blank, SentencePart::Text(".")]
        );
        assert_eq!(split_blanks("no blank"), vec![SentencePart::Text("no blank")]);
    }
}
