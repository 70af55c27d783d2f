// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod content;
    pub mod language;
}
pub mod content;
pub mod gui;
pub mod router;
pub mod view;

pub use config::Config;
pub use content::ContentStore;
pub use error::{Result, WordWideWebError};
pub use router::{Navigator, Route, ViewKind};
pub use types::language::{LanguageCode, LessonNumber};
