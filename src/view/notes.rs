/// Ink colour of the scratch pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Black,
    Red,
    Blue,
}

impl NoteColor {
    pub const ALL: [NoteColor; 3] = [NoteColor::Black, NoteColor::Red, NoteColor::Blue];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            NoteColor::Black => [0, 0, 0],
            NoteColor::Red => [220, 38, 38],
            NoteColor::Blue => [37, 99, 235],
        }
    }
}

pub const VOCABULARY_NOTE_SEED: &str = "Every time you see a new word, write it out 10 times in the target language and vocalize the word as you say it. Once you're comfortable with these words move on to the grammar tab from the previous page. If you need to temporarily take notes online, type them here.";

/// Free-text scratch area. Lives as long as the page that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBuffer {
    pub text: String,
    pub color: NoteColor,
}

impl NoteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(text: &str) -> Self {
        NoteBuffer {
            text: text.to_string(),
            color: NoteColor::default(),
        }
    }

    pub fn set_color(&mut self, color: NoteColor) {
        self.color = color;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
