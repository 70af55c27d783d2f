pub mod blanks;
pub mod flashcard;
pub mod notes;
pub mod page;

pub use blanks::{BlankId, BlankRevealState, ExerciseSection};
pub use flashcard::FlashcardState;
pub use notes::{NoteBuffer, NoteColor};
pub use page::{ActivePage, LessonKey, ReadingPage};
