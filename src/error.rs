use std::path::PathBuf;
use thiserror::Error;

use crate::types::language::LanguageCode;

pub type Result<T> = std::result::Result<T, WordWideWebError>;

#[derive(Error, Debug)]
pub enum WordWideWebError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("Lesson {0} is outside 1..=50")]
    LessonOutOfRange(u32),

    #[error("Duplicate headword '{english}' in lesson {lesson}")]
    DuplicateHeadword { english: String, lesson: u32 },

    #[error("Empty headword in the {language} pack for lesson {lesson}")]
    EmptyHeadword { language: LanguageCode, lesson: u32 },

    #[error("Invalid content pack {path:?}: {reason}")]
    InvalidPack { path: PathBuf, reason: String },
}

impl WordWideWebError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WordWideWebError::Io {
            path: path.into(),
            source,
        }
    }
}
