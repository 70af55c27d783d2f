use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordwideweb::content::resolver::{etymology_placeholder, translation_placeholder};
use wordwideweb::content::{resolve_vocabulary, ContentStore};
use wordwideweb::types::content::{BaseWord, Gloss, PartOfSpeech};
use wordwideweb::view::FlashcardState;
use wordwideweb::{LanguageCode, LessonNumber};

fn language() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::ALL.to_vec())
}

/// A lesson of distinct headwords, each flagged with whether it gets a translation.
fn lesson_words() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::btree_set("[a-z]{1,8}", 0..30)
        .prop_flat_map(|words| {
            let words: Vec<String> = words.into_iter().collect();
            let n = words.len();
            (Just(words), prop::collection::vec(any::<bool>(), n))
        })
        .prop_map(|(words, glossed)| words.into_iter().zip(glossed).collect())
}

fn store_with(words: &[(String, bool)], lang: LanguageCode, lesson: LessonNumber) -> ContentStore {
    let mut store = ContentStore::new();
    for (english, glossed) in words {
        store
            .insert_base_word(
                lesson,
                BaseWord {
                    english: english.clone(),
                    part_of_speech: PartOfSpeech::Noun,
                },
            )
            .unwrap();
        if *glossed {
            store.insert_gloss(
                lang,
                lesson,
                english,
                Gloss {
                    translation: Some(format!("{english}-x")),
                    etymology: None,
                },
            );
        }
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_resolution_keeps_canonical_order(
        words in lesson_words(),
        lang in language(),
        n in 1u32..=50,
    ) {
        let lesson = LessonNumber::new(n).unwrap();
        let store = store_with(&words, lang, lesson);
        let cards = resolve_vocabulary(&store, lang, lesson);

        prop_assert_eq!(cards.len(), words.len());
        for (card, (english, glossed)) in cards.iter().zip(&words) {
            prop_assert_eq!(&card.english, english);
            prop_assert!(!card.translation.is_empty());
            prop_assert!(!card.etymology.is_empty());
            if *glossed {
                prop_assert_eq!(card.translation.clone(), format!("{english}-x"));
            } else {
                prop_assert_eq!(card.translation.clone(), translation_placeholder(english, lang));
            }
            prop_assert_eq!(card.etymology.clone(), etymology_placeholder(english, lang));
        }
    }

    #[test]
    fn prop_shuffle_round_trip_restores_order(
        words in lesson_words(),
        seed in any::<u64>(),
        steps in 0usize..10,
    ) {
        let lesson = LessonNumber::FIRST;
        let store = store_with(&words, LanguageCode::Italian, lesson);
        let cards = resolve_vocabulary(&store, LanguageCode::Italian, lesson);
        let mut deck = FlashcardState::new(cards.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        deck.toggle_shuffle_with(&mut rng);
        prop_assert_eq!(deck.len(), cards.len());
        for _ in 0..steps {
            deck.next();
        }
        prop_assert!(deck.card_index() < deck.len().max(1));
        deck.toggle_shuffle_with(&mut rng);

        prop_assert_eq!(deck.cards(), cards.as_slice());
        prop_assert_eq!(deck.card_index(), 0);
        prop_assert!(!deck.answer_visible());
    }

    #[test]
    fn prop_navigation_stays_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..40)) {
        let store = ContentStore::builtin();
        let mut deck = FlashcardState::new(resolve_vocabulary(&store, LanguageCode::German, LessonNumber::FIRST));
        for forward in moves {
            deck.reveal();
            if forward { deck.next() } else { deck.prev() }
            prop_assert!(deck.card_index() < deck.len());
            prop_assert!(!deck.answer_visible());
        }
    }
}
