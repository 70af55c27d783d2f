use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, WordWideWebError};

pub const LESSONS_PER_LANGUAGE: u32 = 50;

/// The four target languages. The codes double as fragment segments, so `sp`
/// (not `es`) is Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "sp")]
    Spanish,
    #[serde(rename = "de")]
    German,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::Dutch,
        LanguageCode::Italian,
        LanguageCode::Spanish,
        LanguageCode::German,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Dutch => "nl",
            LanguageCode::Italian => "it",
            LanguageCode::Spanish => "sp",
            LanguageCode::German => "de",
        }
    }

    /// Case-sensitive, like the fragment grammar.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        match code {
            "nl" => Some(LanguageCode::Dutch),
            "it" => Some(LanguageCode::Italian),
            "sp" => Some(LanguageCode::Spanish),
            "de" => Some(LanguageCode::German),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::Dutch => "Dutch",
            LanguageCode::Italian => "Italian",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::German => "German",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = WordWideWebError;

    fn from_str(s: &str) -> Result<Self> {
        LanguageCode::from_code(s).ok_or_else(|| WordWideWebError::UnknownLanguage(s.to_string()))
    }
}

/// A lesson number guaranteed to lie in `1..=LESSONS_PER_LANGUAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LessonNumber(u32);

impl LessonNumber {
    pub const FIRST: LessonNumber = LessonNumber(1);

    pub fn new(n: u32) -> Option<LessonNumber> {
        (1..=LESSONS_PER_LANGUAGE).contains(&n).then_some(LessonNumber(n))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = LessonNumber> {
        (1..=LESSONS_PER_LANGUAGE).map(LessonNumber)
    }
}

impl TryFrom<u32> for LessonNumber {
    type Error = WordWideWebError;

    fn try_from(n: u32) -> Result<Self> {
        LessonNumber::new(n).ok_or(WordWideWebError::LessonOutOfRange(n))
    }
}

impl From<LessonNumber> for u32 {
    fn from(lesson: LessonNumber) -> u32 {
        lesson.0
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
