use super::grammar::resolve_grammar;
use super::reading::resolve_stories;
use super::store::ContentStore;
use super::writing::resolve_prompts;
use crate::error::Result;
use crate::router::Route;
use crate::types::content::{Card, LessonContentBundle, VocabularyEntry};
use crate::types::language::{LanguageCode, LessonNumber};

pub fn translation_placeholder(english: &str, lang: LanguageCode) -> String {
    format!("[{} in {}]", english, lang.name())
}

pub fn etymology_placeholder(english: &str, lang: LanguageCode) -> String {
    format!(
        "Etymology connection between {} (English) and its {} translation.",
        english,
        lang.name()
    )
}

/// Joins a lesson's base words with the language's glosses.
///
/// The result has exactly one card per base word, in canonical order. Missing
/// glosses are replaced with placeholder text so that no card has an empty
/// field.
pub fn resolve_vocabulary(store: &ContentStore, lang: LanguageCode, lesson: LessonNumber) -> Vec<Card> {
    store
        .base_vocabulary(lesson)
        .iter()
        .map(|word| VocabularyEntry {
            english: word.english.clone(),
            part_of_speech: word.part_of_speech,
            translation: store
                .translation(lang, lesson, &word.english)
                .map(str::to_string)
                .unwrap_or_else(|| translation_placeholder(&word.english, lang)),
            etymology: store
                .etymology(lang, lesson, &word.english)
                .map(str::to_string)
                .unwrap_or_else(|| etymology_placeholder(&word.english, lang)),
        })
        .collect()
}

pub fn resolve_lesson(store: &ContentStore, lang: LanguageCode, lesson: LessonNumber) -> LessonContentBundle {
    LessonContentBundle {
        language: lang,
        lesson,
        cards: resolve_vocabulary(store, lang, lesson),
        grammar: resolve_grammar(store, lang, lesson),
        stories: resolve_stories(store, lang, lesson),
        writing_prompts: resolve_prompts(store, lang, lesson),
    }
}

/// Pretty JSON for a fragment: the lesson bundle for lesson routes, the parsed
/// route itself for everything else.
pub fn dump_fragment(store: &ContentStore, fragment: &str) -> Result<String> {
    let route = Route::parse(fragment);
    let json = match (route.language(), route.lesson()) {
        (Some(language), Some(lesson)) => serde_json::to_string_pretty(&resolve_lesson(store, language, lesson))?,
        _ => serde_json::to_string_pretty(&route)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::content::{BaseWord, Gloss, PartOfSpeech};

    #[test]
    fn lesson_one_dutch_cards() {
        let store = ContentStore::builtin();
        let cards = resolve_vocabulary(&store, LanguageCode::Dutch, LessonNumber::FIRST);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].translation, "de/het");
        assert_eq!(cards[4].english, "and");
        assert_eq!(cards[4].translation, "en");
        assert_eq!(cards[1].part_of_speech, PartOfSpeech::Verb);
    }

    #[test]
    fn missing_gloss_gets_placeholders() {
        let mut store = ContentStore::new();
        let lesson = LessonNumber::new(2).unwrap();
        store
            .insert_base_word(lesson, BaseWord { english: "house".into(), part_of_speech: PartOfSpeech::Noun })
            .unwrap();
        store
            .insert_base_word(lesson, BaseWord { english: "dog".into(), part_of_speech: PartOfSpeech::Noun })
            .unwrap();
        store.insert_gloss(
            LanguageCode::Italian,
            lesson,
            "dog",
            Gloss { translation: Some("cane".into()), etymology: None },
        );

        let cards = resolve_vocabulary(&store, LanguageCode::Italian, lesson);
        assert_eq!(cards[0].translation, "[house in Italian]");
        assert_eq!(
            cards[0].etymology,
            "Etymology connection between house (English) and its Italian translation."
        );
        assert_eq!(cards[1].translation, "cane");
        assert_eq!(cards[1].etymology, etymology_placeholder("dog", LanguageCode::Italian));
    }

    #[test]
    fn dump_lesson_fragment_as_bundle() {
        let store = ContentStore::builtin();
        let json = dump_fragment(&store, "#reading-de-1").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["language"], "de");
        assert_eq!(value["lesson"], 1);
        assert_eq!(value["cards"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["cards"][1]["english"], "be");
        assert_eq!(value["cards"][1]["type"], "verb");
        assert_eq!(value["cards"][1]["translation"], "sein");
        assert_eq!(value["grammar"]["topic"], "PresentTense");
        assert_eq!(value["writing_prompts"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn dump_other_fragments_as_route() {
        let store = ContentStore::builtin();
        let about: serde_json::Value = serde_json::from_str(&dump_fragment(&store, "about").unwrap()).unwrap();
        assert_eq!(about, "About");
        let list: serde_json::Value = serde_json::from_str(&dump_fragment(&store, "nl").unwrap()).unwrap();
        assert_eq!(list, serde_json::json!({ "LanguageList": "nl" }));
        let fallback: serde_json::Value = serde_json::from_str(&dump_fragment(&store, "vocab-nl-99").unwrap()).unwrap();
        assert_eq!(fallback, "Main");
    }

    #[test]
    fn empty_lesson_resolves_to_no_cards() {
        let store = ContentStore::builtin();
        let bundle = resolve_lesson(&store, LanguageCode::Spanish, LessonNumber::new(20).unwrap());
        assert!(bundle.cards.is_empty());
        assert_eq!(bundle.writing_prompts.len(), 5);
        assert!(!bundle.stories.full.is_empty());
    }
}
