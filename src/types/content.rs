use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::{LanguageCode, LessonNumber};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Article,
    Verb,
    Noun,
    Pronoun,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Numeral,
    #[serde(other)]
    Other,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PartOfSpeech::Article => "article",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Other => "other",
        };
        f.write_str(tag)
    }
}

/// Language-agnostic headword of a lesson.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BaseWord {
    pub english: String,
    #[serde(rename = "type")]
    pub part_of_speech: PartOfSpeech,
}

/// Per-language text attached to a headword. Either half may still be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Gloss {
    pub translation: Option<String>,
    pub etymology: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub english: String,
    #[serde(rename = "type")]
    pub part_of_speech: PartOfSpeech,
    pub translation: String,
    pub etymology: String,
}

/// A vocabulary entry as shown on a flashcard.
pub type Card = VocabularyEntry;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarTopic {
    PresentTense,
    PastSimple,
    PastContinuous,
    FutureSimple,
    PresentPerfect,
    Conditional,
    Imperative,
}

impl GrammarTopic {
    pub const ROTATION: [GrammarTopic; 7] = [
        GrammarTopic::PresentTense,
        GrammarTopic::PastSimple,
        GrammarTopic::PastContinuous,
        GrammarTopic::FutureSimple,
        GrammarTopic::PresentPerfect,
        GrammarTopic::Conditional,
        GrammarTopic::Imperative,
    ];

    /// Topics cycle every seven lessons, starting with the present tense.
    pub fn for_lesson(lesson: LessonNumber) -> GrammarTopic {
        let idx = (lesson.get() as usize - 1) % Self::ROTATION.len();
        Self::ROTATION[idx]
    }

    pub fn title(&self) -> &'static str {
        match self {
            GrammarTopic::PresentTense => "Present Tense",
            GrammarTopic::PastSimple => "Past Simple (Preterite)",
            GrammarTopic::PastContinuous => "Past Continuous (Imperfect)",
            GrammarTopic::FutureSimple => "Future Simple",
            GrammarTopic::PresentPerfect => "Present Perfect",
            GrammarTopic::Conditional => "Conditional",
            GrammarTopic::Imperative => "Imperative",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExampleSentence {
    pub original: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlankExercise {
    pub sentence: String,
    pub answer: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordForWord {
    pub original: String,
    pub literal: String,
}

/// Authored grammar material for one (language, topic). Sections may be shorter
/// than the rendered minimum; the grammar resolver pads them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarMaterial {
    pub examples: Vec<ExampleSentence>,
    pub blanks: Vec<BlankExercise>,
    pub word_for_word: Vec<WordForWord>,
    pub topic_exercises: Vec<BlankExercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GrammarLesson {
    pub topic: GrammarTopic,
    pub examples: Vec<ExampleSentence>,
    pub blanks: Vec<BlankExercise>,
    pub word_for_word: Vec<WordForWord>,
    pub topic_exercises: Vec<BlankExercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmersionLevel {
    Bilingual30,
    Bilingual50,
    Full,
}

impl ImmersionLevel {
    pub fn percent(&self) -> u8 {
        match self {
            ImmersionLevel::Bilingual30 => 30,
            ImmersionLevel::Bilingual50 => 50,
            ImmersionLevel::Full => 100,
        }
    }

    /// Only the mixed stories mark their foreign words.
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, ImmersionLevel::Full)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReadingStories {
    pub bilingual_30: String,
    pub bilingual_50: String,
    pub full: String,
}

impl ReadingStories {
    pub fn get(&self, level: ImmersionLevel) -> &str {
        match level {
            ImmersionLevel::Bilingual30 => &self.bilingual_30,
            ImmersionLevel::Bilingual50 => &self.bilingual_50,
            ImmersionLevel::Full => &self.full,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LessonContentBundle {
    pub language: LanguageCode,
    pub lesson: LessonNumber,
    pub cards: Vec<Card>,
    pub grammar: GrammarLesson,
    pub stories: ReadingStories,
    pub writing_prompts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_rotation_wraps_every_seven_lessons() {
        let lesson = |n| LessonNumber::new(n).unwrap();
        assert_eq!(GrammarTopic::for_lesson(lesson(1)), GrammarTopic::PresentTense);
        assert_eq!(GrammarTopic::for_lesson(lesson(5)), GrammarTopic::PresentPerfect);
        assert_eq!(GrammarTopic::for_lesson(lesson(7)), GrammarTopic::Imperative);
        assert_eq!(GrammarTopic::for_lesson(lesson(8)), GrammarTopic::PresentTense);
        assert_eq!(GrammarTopic::for_lesson(lesson(50)), GrammarTopic::PresentTense);
    }

    #[test]
    fn unknown_part_of_speech_maps_to_other() {
        let word: BaseWord =
            serde_json::from_str(r#"{"english":"hello","type":"interjection"}"#).unwrap();
        assert_eq!(word.part_of_speech, PartOfSpeech::Other);
        let verb: BaseWord = serde_json::from_str(r#"{"english":"be","type":"verb"}"#).unwrap();
        assert_eq!(verb.part_of_speech, PartOfSpeech::Verb);
    }
}
