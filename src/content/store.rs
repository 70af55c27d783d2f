use std::collections::{HashMap, HashSet};

use super::builtin;
use super::pack_io::LessonPack;
use super::reading::HighlightSet;
use crate::error::{Result, WordWideWebError};
use crate::types::content::{
    BaseWord, BlankExercise, ExampleSentence, Gloss, GrammarMaterial, GrammarTopic,
    ReadingStories, WordForWord,
};
use crate::types::language::{LanguageCode, LessonNumber};

static NO_HIGHLIGHTS: HighlightSet = HighlightSet::empty();

/// Headwords are compared trimmed and lowercased.
pub fn normalize_headword(english: &str) -> String {
    english.trim().to_lowercase()
}

/// Read-only lesson content keyed by language and lesson.
///
/// The base vocabulary of a lesson is shared by all languages; translations,
/// etymologies, stories and prompts are per language. Nothing in here is
/// mandatory: lookups return `None` (or an empty slice) for content that has
/// not been authored yet, and callers substitute placeholders.
#[derive(Debug, Default, Clone)]
pub struct ContentStore {
    base_vocabulary: HashMap<LessonNumber, Vec<BaseWord>>,
    glosses: HashMap<(LanguageCode, LessonNumber), HashMap<String, Gloss>>,
    stories: HashMap<(LanguageCode, LessonNumber), ReadingStories>,
    writing_prompts: HashMap<(LanguageCode, LessonNumber), Vec<String>>,
    grammar: HashMap<(LanguageCode, GrammarTopic), GrammarMaterial>,
    highlight_sets: HashMap<LanguageCode, HighlightSet>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in content: lesson 1 for every language plus the
    /// present-tense and present-perfect grammar material.
    pub fn builtin() -> Self {
        let mut store = ContentStore::new();
        let lesson_1 = LessonNumber::FIRST;

        for &(english, part_of_speech) in builtin::LESSON_1_WORDS {
            store.base_vocabulary.entry(lesson_1).or_default().push(BaseWord {
                english: english.to_string(),
                part_of_speech,
            });
        }
        for &(lang, english, translation, etymology) in builtin::LESSON_1_GLOSSES {
            store.insert_gloss(
                lang,
                lesson_1,
                english,
                Gloss {
                    translation: Some(translation.to_string()),
                    etymology: Some(etymology.to_string()),
                },
            );
        }
        for &(lang, bilingual_30, bilingual_50, full) in builtin::LESSON_1_STORIES {
            store.stories.insert(
                (lang, lesson_1),
                ReadingStories {
                    bilingual_30: bilingual_30.to_string(),
                    bilingual_50: bilingual_50.to_string(),
                    full: full.to_string(),
                },
            );
        }
        for (lang, prompts) in builtin::LESSON_1_PROMPTS {
            store
                .writing_prompts
                .insert((*lang, lesson_1), prompts.iter().map(|p| p.to_string()).collect());
        }
        for (lang, words) in builtin::HIGHLIGHT_WORDS {
            store
                .highlight_sets
                .entry(*lang)
                .or_default()
                .extend(words.iter().copied());
        }

        for &(lang, original, translation) in builtin::PRESENT_TENSE_EXAMPLES {
            store.grammar_entry(lang, GrammarTopic::PresentTense).examples.push(ExampleSentence {
                original: original.to_string(),
                translation: translation.to_string(),
            });
        }
        for &(lang, sentence, answer, translation) in builtin::PRESENT_TENSE_BLANKS {
            store.grammar_entry(lang, GrammarTopic::PresentTense).blanks.push(BlankExercise {
                sentence: sentence.to_string(),
                answer: answer.to_string(),
                translation: translation.to_string(),
            });
        }
        for &(lang, original, literal) in builtin::PRESENT_TENSE_WORD_FOR_WORD {
            store.grammar_entry(lang, GrammarTopic::PresentTense).word_for_word.push(WordForWord {
                original: original.to_string(),
                literal: literal.to_string(),
            });
        }
        for &(lang, sentence, answer, translation) in builtin::PRESENT_PERFECT_EXERCISES {
            store
                .grammar_entry(lang, GrammarTopic::PresentPerfect)
                .topic_exercises
                .push(BlankExercise {
                    sentence: sentence.to_string(),
                    answer: answer.to_string(),
                    translation: translation.to_string(),
                });
        }

        store
    }

    fn grammar_entry(&mut self, lang: LanguageCode, topic: GrammarTopic) -> &mut GrammarMaterial {
        self.grammar.entry((lang, topic)).or_default()
    }

    /// Canonical word list of a lesson. Empty when nothing is authored.
    pub fn base_vocabulary(&self, lesson: LessonNumber) -> &[BaseWord] {
        self.base_vocabulary
            .get(&lesson)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn gloss(&self, lang: LanguageCode, lesson: LessonNumber, english: &str) -> Option<&Gloss> {
        self.glosses
            .get(&(lang, lesson))
            .and_then(|table| table.get(&normalize_headword(english)))
    }

    pub fn translation(&self, lang: LanguageCode, lesson: LessonNumber, english: &str) -> Option<&str> {
        self.gloss(lang, lesson, english)
            .and_then(|g| g.translation.as_deref())
    }

    pub fn etymology(&self, lang: LanguageCode, lesson: LessonNumber, english: &str) -> Option<&str> {
        self.gloss(lang, lesson, english)
            .and_then(|g| g.etymology.as_deref())
    }

    pub fn stories(&self, lang: LanguageCode, lesson: LessonNumber) -> Option<&ReadingStories> {
        self.stories.get(&(lang, lesson))
    }

    pub fn writing_prompts(&self, lang: LanguageCode, lesson: LessonNumber) -> Option<&[String]> {
        self.writing_prompts.get(&(lang, lesson)).map(Vec::as_slice)
    }

    pub fn grammar_material(&self, lang: LanguageCode, topic: GrammarTopic) -> Option<&GrammarMaterial> {
        self.grammar.get(&(lang, topic))
    }

    pub fn highlight_set(&self, lang: LanguageCode) -> &HighlightSet {
        self.highlight_sets.get(&lang).unwrap_or(&NO_HIGHLIGHTS)
    }

    /// Appends a headword to a lesson's canonical list.
    ///
    /// Headwords are unique per lesson; a second word with the same normalized
    /// spelling is rejected.
    pub fn insert_base_word(&mut self, lesson: LessonNumber, word: BaseWord) -> Result<()> {
        let key = normalize_headword(&word.english);
        let words = self.base_vocabulary.entry(lesson).or_default();
        if words.iter().any(|w| normalize_headword(&w.english) == key) {
            return Err(WordWideWebError::DuplicateHeadword {
                english: word.english,
                lesson: lesson.get(),
            });
        }
        words.push(word);
        Ok(())
    }

    /// Sets the per-language text of a headword. Fields left `None` keep any
    /// previously stored value.
    pub fn insert_gloss(&mut self, lang: LanguageCode, lesson: LessonNumber, english: &str, gloss: Gloss) {
        let slot = self
            .glosses
            .entry((lang, lesson))
            .or_default()
            .entry(normalize_headword(english))
            .or_default();
        if gloss.translation.is_some() {
            slot.translation = gloss.translation;
        }
        if gloss.etymology.is_some() {
            slot.etymology = gloss.etymology;
        }
    }

    /// Merges one lesson pack into the store.
    ///
    /// The pack is validated before anything is written, so a rejected pack
    /// leaves the store untouched. Headwords the lesson already has (from the
    /// built-in tables or from another language's pack) only receive glosses.
    pub fn merge_pack(&mut self, pack: LessonPack) -> Result<()> {
        let mut seen = HashSet::new();
        for word in &pack.vocabulary {
            let key = normalize_headword(&word.english);
            if key.is_empty() {
                return Err(WordWideWebError::EmptyHeadword {
                    language: pack.language,
                    lesson: pack.lesson.get(),
                });
            }
            if !seen.insert(key) {
                return Err(WordWideWebError::DuplicateHeadword {
                    english: word.english.clone(),
                    lesson: pack.lesson.get(),
                });
            }
        }

        let LessonPack {
            language,
            lesson,
            vocabulary,
            stories,
            writing_prompts,
            highlight_words,
        } = pack;

        for word in vocabulary {
            let existing = self
                .base_vocabulary(lesson)
                .iter()
                .find(|w| normalize_headword(&w.english) == normalize_headword(&word.english))
                .map(|w| w.part_of_speech);
            match existing {
                Some(pos) if pos != word.part_of_speech => {
                    log::warn!(
                        "Lesson {} already lists '{}' as {}; ignoring {} from the {} pack",
                        lesson, word.english, pos, word.part_of_speech, language
                    );
                }
                Some(_) => {}
                None => self.insert_base_word(
                    lesson,
                    BaseWord {
                        english: word.english.clone(),
                        part_of_speech: word.part_of_speech,
                    },
                )?,
            }
            if let Some(previous) = self.gloss(language, lesson, &word.english) {
                if replaces(&previous.translation, &word.translation)
                    || replaces(&previous.etymology, &word.etymology)
                {
                    log::warn!(
                        "The {} pack for lesson {} overrides the existing gloss of '{}'",
                        language, lesson, word.english
                    );
                }
            }
            self.insert_gloss(
                language,
                lesson,
                &word.english,
                Gloss {
                    translation: word.translation,
                    etymology: word.etymology,
                },
            );
        }

        if let Some(stories) = stories {
            if self.stories.get(&(language, lesson)).is_some_and(|s| *s != stories) {
                log::warn!("The {} pack for lesson {} overrides the existing stories", language, lesson);
            }
            self.stories.insert((language, lesson), stories);
        }
        if !writing_prompts.is_empty() {
            if self
                .writing_prompts
                .get(&(language, lesson))
                .is_some_and(|p| *p != writing_prompts)
            {
                log::warn!("The {} pack for lesson {} overrides the existing writing prompts", language, lesson);
            }
            self.writing_prompts.insert((language, lesson), writing_prompts);
        }
        if !highlight_words.is_empty() {
            self.highlight_sets
                .entry(language)
                .or_default()
                .extend(highlight_words.iter().map(String::as_str));
        }
        Ok(())
    }
}

/// True when `new` would overwrite a different, already present value.
fn replaces(old: &Option<String>, new: &Option<String>) -> bool {
    matches!((old, new), (Some(old), Some(new)) if old != new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::pack_io::PackWord;
    use crate::types::content::PartOfSpeech;

    fn lesson(n: u32) -> LessonNumber {
        LessonNumber::new(n).unwrap()
    }

    #[test]
    fn builtin_lesson_one_has_five_words() {
        let store = ContentStore::builtin();
        let words: Vec<&str> = store
            .base_vocabulary(LessonNumber::FIRST)
            .iter()
            .map(|w| w.english.as_str())
            .collect();
        assert_eq!(words, vec!["the", "be", "to", "of", "and"]);
    }

    #[test]
    fn builtin_glosses_cover_every_language() {
        let store = ContentStore::builtin();
        for lang in LanguageCode::ALL {
            for word in store.base_vocabulary(LessonNumber::FIRST) {
                assert!(store.translation(lang, LessonNumber::FIRST, &word.english).is_some());
                assert!(store.etymology(lang, LessonNumber::FIRST, &word.english).is_some());
            }
        }
        assert_eq!(
            store.translation(LanguageCode::German, LessonNumber::FIRST, "the"),
            Some("der/die/das")
        );
    }

    #[test]
    fn unknown_lesson_is_empty_not_an_error() {
        let store = ContentStore::builtin();
        assert!(store.base_vocabulary(lesson(12)).is_empty());
        assert_eq!(store.translation(LanguageCode::Dutch, lesson(12), "the"), None);
        assert!(store.stories(LanguageCode::Dutch, lesson(12)).is_none());
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        let store = ContentStore::builtin();
        assert_eq!(
            store.translation(LanguageCode::Dutch, LessonNumber::FIRST, "  The "),
            Some("de/het")
        );
    }

    #[test]
    fn duplicate_headword_is_rejected() {
        let mut store = ContentStore::new();
        let word = |e: &str| BaseWord { english: e.to_string(), part_of_speech: PartOfSpeech::Noun };
        store.insert_base_word(lesson(2), word("house")).unwrap();
        let err = store.insert_base_word(lesson(2), word("House")).unwrap_err();
        assert!(matches!(err, WordWideWebError::DuplicateHeadword { lesson: 2, .. }));
        assert_eq!(store.base_vocabulary(lesson(2)).len(), 1);
        // Same word in another lesson is fine.
        store.insert_base_word(lesson(3), word("house")).unwrap();
    }

    #[test]
    fn rejected_pack_leaves_store_untouched() {
        let mut store = ContentStore::builtin();
        let pack = LessonPack {
            language: LanguageCode::Dutch,
            lesson: lesson(2),
            vocabulary: vec![
                PackWord::new("house", PartOfSpeech::Noun, Some("huis")),
                PackWord::new("house", PartOfSpeech::Noun, Some("woning")),
            ],
            stories: None,
            writing_prompts: vec!["Describe your house.".to_string()],
            highlight_words: vec![],
        };
        assert!(store.merge_pack(pack).is_err());
        assert!(store.base_vocabulary(lesson(2)).is_empty());
        assert!(store.writing_prompts(LanguageCode::Dutch, lesson(2)).is_none());
    }

    #[test]
    fn empty_headword_names_language_and_lesson() {
        let mut store = ContentStore::new();
        let err = store
            .merge_pack(LessonPack {
                language: LanguageCode::Italian,
                lesson: lesson(4),
                vocabulary: vec![PackWord::new("  ", PartOfSpeech::Noun, Some("casa"))],
                stories: None,
                writing_prompts: vec![],
                highlight_words: vec![],
            })
            .unwrap_err();
        assert!(matches!(
            err,
            WordWideWebError::EmptyHeadword { language: LanguageCode::Italian, lesson: 4 }
        ));
        assert_eq!(err.to_string(), "Empty headword in the it pack for lesson 4");
    }

    #[test]
    fn later_pack_overrides_earlier_content() {
        let pack = |translation: &str, prompt: &str| LessonPack {
            language: LanguageCode::Dutch,
            lesson: lesson(3),
            vocabulary: vec![PackWord::new("house", PartOfSpeech::Noun, Some(translation))],
            stories: None,
            writing_prompts: vec![prompt.to_string()],
            highlight_words: vec![],
        };
        let mut store = ContentStore::new();
        store.merge_pack(pack("huis", "Describe your house.")).unwrap();
        store.merge_pack(pack("woning", "Describe your street.")).unwrap();

        assert_eq!(store.base_vocabulary(lesson(3)).len(), 1);
        assert_eq!(store.translation(LanguageCode::Dutch, lesson(3), "house"), Some("woning"));
        assert_eq!(
            store.writing_prompts(LanguageCode::Dutch, lesson(3)),
            Some(&["Describe your street.".to_string()][..])
        );
    }

    #[test]
    fn only_differing_values_count_as_overrides() {
        let some = |s: &str| Some(s.to_string());
        assert!(replaces(&some("huis"), &some("woning")));
        assert!(!replaces(&some("huis"), &some("huis")));
        assert!(!replaces(&None, &some("huis")));
        assert!(!replaces(&some("huis"), &None));
    }

    #[test]
    fn packs_for_two_languages_share_headwords() {
        let mut store = ContentStore::new();
        store
            .merge_pack(LessonPack {
                language: LanguageCode::Dutch,
                lesson: lesson(2),
                vocabulary: vec![PackWord::new("house", PartOfSpeech::Noun, Some("huis"))],
                stories: None,
                writing_prompts: vec![],
                highlight_words: vec!["huis".to_string()],
            })
            .unwrap();
        store
            .merge_pack(LessonPack {
                language: LanguageCode::German,
                lesson: lesson(2),
                vocabulary: vec![PackWord::new("house", PartOfSpeech::Noun, Some("Haus"))],
                stories: None,
                writing_prompts: vec![],
                highlight_words: vec![],
            })
            .unwrap();

        assert_eq!(store.base_vocabulary(lesson(2)).len(), 1);
        assert_eq!(store.translation(LanguageCode::Dutch, lesson(2), "house"), Some("huis"));
        assert_eq!(store.translation(LanguageCode::German, lesson(2), "house"), Some("Haus"));
        assert!(store.highlight_set(LanguageCode::Dutch).contains("huis"));
        assert!(!store.highlight_set(LanguageCode::German).contains("huis"));
    }
}
