//! Reading stories and foreign-word highlighting.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::store::ContentStore;
use crate::types::content::{ImmersionLevel, ReadingStories};
use crate::types::language::{LanguageCode, LessonNumber};

/// Lowercased target-language words that are marked in bilingual stories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet(BTreeSet<String>);

impl HighlightSet {
    pub const fn empty() -> Self {
        HighlightSet(BTreeSet::new())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> Extend<&'a str> for HighlightSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|w| w.trim().to_lowercase()));
    }
}

impl<'a> FromIterator<&'a str> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = HighlightSet::default();
        set.extend(iter);
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenClass {
    Plain,
    Highlighted,
}

/// One whitespace-delimited word of a story, punctuation included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryToken<'a> {
    pub text: &'a str,
    pub class: TokenClass,
}

fn trailing_punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.,!?;:]+$").expect("static pattern"))
}

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+").expect("static pattern"))
}

/// Lowercases a token and drops its trailing punctuation.
pub fn depunctuate(token: &str) -> String {
    trailing_punctuation().replace(token, "").to_lowercase()
}

pub fn classify(token: &str, highlights: &HighlightSet) -> TokenClass {
    if highlights.contains(&depunctuate(token)) {
        TokenClass::Highlighted
    } else {
        TokenClass::Plain
    }
}

/// Splits a story on whitespace and classifies every word.
pub fn highlight<'a>(text: &'a str, highlights: &HighlightSet) -> Vec<StoryToken<'a>> {
    word_pattern()
        .find_iter(text)
        .map(|m| StoryToken {
            text: m.as_str(),
            class: classify(m.as_str(), highlights),
        })
        .collect()
}

/// Tokens for one immersion level. The full-immersion story is never marked.
pub fn highlight_story<'a>(
    stories: &'a ReadingStories,
    level: ImmersionLevel,
    highlights: &HighlightSet,
) -> Vec<StoryToken<'a>> {
    let text = stories.get(level);
    if level.is_highlighted() {
        highlight(text, highlights)
    } else {
        highlight(text, &HighlightSet::empty())
    }
}

pub fn resolve_stories(store: &ContentStore, lang: LanguageCode, lesson: LessonNumber) -> ReadingStories {
    if let Some(stories) = store.stories(lang, lesson) {
        return stories.clone();
    }
    let name = lang.name();
    ReadingStories {
        bilingual_30: format!(
            "This is a sample bilingual story with 30% {name} words. Some words would be in {name} and marked in red."
        ),
        bilingual_50: format!(
            "This is a sample bilingual story with 50% {name} words. Half of the words would be in {name} and marked in red."
        ),
        full: format!(
            "This is a sample story entirely in {name}. It would use the vocabulary from lesson {lesson}."
        ),
    }
}
