//! Per-page state. A fresh `ActivePage` is built on every navigation, so
//! deck position, shuffle and notes never survive a page change.

use crate::content::grammar::resolve_grammar;
use crate::content::reading::resolve_stories;
use crate::content::writing::resolve_prompts;
use crate::content::{resolve_vocabulary, ContentStore, HighlightSet};
use crate::router::{Route, ViewKind};
use crate::types::content::{GrammarLesson, ReadingStories};
use crate::types::language::{LanguageCode, LessonNumber};

use super::blanks::BlankRevealState;
use super::flashcard::FlashcardState;
use super::notes::{NoteBuffer, VOCABULARY_NOTE_SEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonKey {
    pub language: LanguageCode,
    pub lesson: LessonNumber,
}

#[derive(Debug, Clone)]
pub struct ReadingPage {
    pub stories: ReadingStories,
    pub highlights: HighlightSet,
}

#[derive(Debug, Clone)]
pub enum ActivePage {
    Main,
    About,
    How,
    Contact,
    LessonList(LanguageCode),
    Vocab {
        key: LessonKey,
        deck: FlashcardState,
        notes: NoteBuffer,
    },
    Test {
        key: LessonKey,
        deck: FlashcardState,
        notes: NoteBuffer,
    },
    Grammar {
        key: LessonKey,
        lesson: GrammarLesson,
        reveal: BlankRevealState,
    },
    Reading {
        key: LessonKey,
        page: ReadingPage,
    },
    Writing {
        key: LessonKey,
        prompts: Vec<String>,
        notes: NoteBuffer,
    },
}

impl ActivePage {
    pub fn build(route: Route, store: &ContentStore) -> ActivePage {
        match route {
            Route::Main => ActivePage::Main,
            Route::About => ActivePage::About,
            Route::How => ActivePage::How,
            Route::Contact => ActivePage::Contact,
            Route::LanguageList(lang) => ActivePage::LessonList(lang),
            Route::Lesson { kind, language, lesson } => {
                let key = LessonKey { language, lesson };
                match kind {
                    ViewKind::Vocab => ActivePage::Vocab {
                        key,
                        deck: FlashcardState::new(resolve_vocabulary(store, language, lesson)),
                        notes: NoteBuffer::seeded(VOCABULARY_NOTE_SEED),
                    },
                    ViewKind::Test => ActivePage::Test {
                        key,
                        deck: FlashcardState::new(resolve_vocabulary(store, language, lesson)),
                        notes: NoteBuffer::new(),
                    },
                    ViewKind::Grammar => ActivePage::Grammar {
                        key,
                        lesson: resolve_grammar(store, language, lesson),
                        reveal: BlankRevealState::default(),
                    },
                    ViewKind::Reading => ActivePage::Reading {
                        key,
                        page: ReadingPage {
                            stories: resolve_stories(store, language, lesson),
                            highlights: store.highlight_set(language).clone(),
                        },
                    },
                    ViewKind::Writing => ActivePage::Writing {
                        key,
                        prompts: resolve_prompts(store, language, lesson),
                        notes: NoteBuffer::new(),
                    },
                }
            }
        }
    }

    pub fn lesson_key(&self) -> Option<LessonKey> {
        match self {
            ActivePage::Vocab { key, .. }
            | ActivePage::Test { key, .. }
            | ActivePage::Grammar { key, .. }
            | ActivePage::Reading { key, .. }
            | ActivePage::Writing { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn deck(&self) -> Option<&FlashcardState> {
        match self {
            ActivePage::Vocab { deck, .. } | ActivePage::Test { deck, .. } => Some(deck),
            _ => None,
        }
    }

    pub fn deck_mut(&mut self) -> Option<&mut FlashcardState> {
        match self {
            ActivePage::Vocab { deck, .. } | ActivePage::Test { deck, .. } => Some(deck),
            _ => None,
        }
    }

    pub fn notes_mut(&mut self) -> Option<&mut NoteBuffer> {
        match self {
            ActivePage::Vocab { notes, .. }
            | ActivePage::Test { notes, .. }
            | ActivePage::Writing { notes, .. } => Some(notes),
            _ => None,
        }
    }
}
