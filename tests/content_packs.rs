use std::fs;
use tempfile::TempDir;

use wordwideweb::config::load_config_from_file;
use wordwideweb::content::pack_io::save_lesson_pack;
use wordwideweb::content::{load_pack_directory, resolve_lesson, ContentStore, LessonPack, PackWord};
use wordwideweb::types::content::{PartOfSpeech, ReadingStories};
use wordwideweb::{LanguageCode, LessonNumber};

fn spanish_lesson_two() -> LessonPack {
    LessonPack {
        language: LanguageCode::Spanish,
        lesson: LessonNumber::new(2).unwrap(),
        vocabulary: vec![
            PackWord::new("house", PartOfSpeech::Noun, Some("casa")),
            PackWord::new("eat", PartOfSpeech::Verb, Some("comer")),
        ],
        stories: Some(ReadingStories {
            bilingual_30: "The casa is big.".to_string(),
            bilingual_50: "La casa is very big.".to_string(),
            full: "La casa es muy grande.".to_string(),
        }),
        writing_prompts: vec!["Describe your casa.".to_string()],
        highlight_words: vec!["casa".to_string()],
    }
}

#[test]
fn config_points_at_pack_directory() {
    let root = TempDir::new().unwrap();
    let packs = root.path().join("packs");
    fs::create_dir(&packs).unwrap();
    save_lesson_pack(&spanish_lesson_two(), &packs.join("sp-02.lesson.json")).unwrap();
    fs::write(packs.join("broken.lesson.json"), "{ not json").unwrap();
    fs::write(packs.join("notes.txt"), "ignored").unwrap();

    let config_path = root.path().join("config.toml");
    fs::write(
        &config_path,
        format!("start_page = \"reading-sp-2\"\ncontent_dir = {:?}\n", packs.display().to_string()),
    )
    .unwrap();
    let config = load_config_from_file(&config_path).unwrap();
    let dir = config.content_dir.expect("content_dir set");

    let mut store = ContentStore::builtin();
    let report = load_pack_directory(&mut store, &dir).unwrap();
    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.skipped.len(), 1);

    let bundle = resolve_lesson(&store, LanguageCode::Spanish, LessonNumber::new(2).unwrap());
    let english: Vec<_> = bundle.cards.iter().map(|c| c.english.as_str()).collect();
    assert_eq!(english, ["house", "eat"]);
    assert_eq!(bundle.cards[0].translation, "casa");
    assert_eq!(bundle.stories.full, "La casa es muy grande.");
    assert_eq!(bundle.writing_prompts, ["Describe your casa."]);
    assert!(store.highlight_set(LanguageCode::Spanish).contains("casa"));
}

#[test]
fn other_languages_see_placeholders_for_pack_words() {
    let mut store = ContentStore::builtin();
    store.merge_pack(spanish_lesson_two()).unwrap();

    let bundle = resolve_lesson(&store, LanguageCode::German, LessonNumber::new(2).unwrap());
    assert_eq!(bundle.cards.len(), 2);
    assert_eq!(bundle.cards[0].translation, "[house in German]");
}
