mod builtin;
pub mod grammar;
pub mod pack_io;
pub mod reading;
pub mod resolver;
pub mod store;
pub mod writing;

pub use pack_io::{load_pack_directory, LessonPack, PackWord};
pub use reading::{classify, highlight, HighlightSet, TokenClass};
pub use resolver::{dump_fragment, resolve_lesson, resolve_vocabulary};
pub use store::ContentStore;
