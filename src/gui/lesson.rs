use egui::{Color32, RichText};

use super::page_button;
use crate::content::grammar::{split_blanks, SentencePart};
use crate::content::reading::{highlight_story, TokenClass};
use crate::content::writing::WRITING_TIPS;
use crate::router::{Route, ViewKind};
use crate::types::content::{BlankExercise, GrammarLesson, ImmersionLevel};
use crate::view::{
    BlankId, BlankRevealState, ExerciseSection, FlashcardState, LessonKey, NoteBuffer, NoteColor, ReadingPage,
};

const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(220, 38, 38);

fn lesson_header(ui: &mut egui::Ui, key: LessonKey, kind: ViewKind) {
    ui.vertical_centered(|ui| {
        ui.heading(
            RichText::new(format!("{} {} - Lesson {}", key.language.name(), kind.title(), key.lesson))
                .size(26.0)
                .strong(),
        );
    });
    ui.separator();
}

/// Links to the other four pages of the same lesson.
fn cross_links(ui: &mut egui::Ui, key: LessonKey, current: ViewKind, requested: &mut Option<Route>) {
    ui.add_space(12.0);
    ui.separator();
    ui.horizontal(|ui| {
        for kind in ViewKind::ALL.into_iter().filter(|k| *k != current) {
            let route = Route::Lesson {
                kind,
                language: key.language,
                lesson: key.lesson,
            };
            page_button(ui, kind.title(), route, requested);
        }
        ui.separator();
        page_button(ui, "All lessons", Route::LanguageList(key.language), requested);
    });
}

fn note_color(color: NoteColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

fn note_pad(ui: &mut egui::Ui, id: &str, notes: &mut NoteBuffer, hint: &str) {
    ui.horizontal(|ui| {
        ui.label("Ink:");
        for color in NoteColor::ALL {
            let label = RichText::new(format!("{:?}", color)).color(note_color(color));
            ui.selectable_value(&mut notes.color, color, label);
        }
        if ui.button("Clear").clicked() {
            notes.clear();
        }
    });
    ui.add(
        egui::TextEdit::multiline(&mut notes.text)
            .id_source(id)
            .hint_text(hint)
            .text_color(note_color(notes.color))
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );
}

/// Card face plus the prev / next / shuffle controls. `with_etymology` shows
/// the memory note on the answer side.
fn deck_controls(ui: &mut egui::Ui, deck: &mut FlashcardState, with_etymology: bool) {
    let Some(card) = deck.current_card().cloned() else {
        ui.label("No vocabulary available for this lesson yet.");
        return;
    };

    egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&card.english).size(30.0).strong());
            ui.label(RichText::new(format!("({})", card.part_of_speech)).italics());
            ui.add_space(12.0);
            if deck.answer_visible() {
                ui.label(RichText::new(&card.translation).size(24.0));
                if with_etymology {
                    ui.add_space(8.0);
                    ui.label(&card.etymology);
                }
                ui.add_space(8.0);
                if ui.button("Hide Answer").clicked() {
                    deck.hide();
                }
            } else if ui.button("Show Answer").clicked() {
                deck.reveal();
            }
        });
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(deck.has_prev(), egui::Button::new("←")).clicked() {
            deck.prev();
        }
        if let Some(progress) = deck.progress_label() {
            ui.label(progress);
        }
        if ui.add_enabled(deck.has_next(), egui::Button::new("→")).clicked() {
            deck.next();
        }
        let hover = if deck.shuffle_enabled() {
            "Disable shuffle"
        } else {
            "Enable shuffle"
        };
        if ui
            .selectable_label(deck.shuffle_enabled(), "🔀")
            .on_hover_text(hover)
            .clicked()
        {
            deck.toggle_shuffle();
        }
    });
}

pub(super) fn vocab_page(
    ui: &mut egui::Ui,
    key: LessonKey,
    deck: &mut FlashcardState,
    notes: &mut NoteBuffer,
    requested: &mut Option<Route>,
) {
    lesson_header(ui, key, ViewKind::Vocab);
    deck_controls(ui, deck, true);
    ui.add_space(12.0);
    ui.heading("Notes");
    note_pad(ui, "vocab_notes", notes, "Take notes here...");
    cross_links(ui, key, ViewKind::Vocab, requested);
}

pub(super) fn test_page(
    ui: &mut egui::Ui,
    key: LessonKey,
    deck: &mut FlashcardState,
    notes: &mut NoteBuffer,
    requested: &mut Option<Route>,
) {
    lesson_header(ui, key, ViewKind::Test);
    ui.label(format!(
        "Write the {} word for each card in your notebook before you reveal it.",
        key.language.name()
    ));
    deck_controls(ui, deck, false);
    ui.add_space(12.0);
    ui.heading("Notepad");
    note_pad(ui, "test_notes", notes, "Write your answers here...");
    cross_links(ui, key, ViewKind::Test, requested);
}

/// One exercise line; its blanks show the answer while the pointer is over them.
fn blank_line(ui: &mut egui::Ui, exercise: &BlankExercise, id: BlankId, reveal: &mut BlankRevealState) {
    let mut hovered = false;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for part in split_blanks(&exercise.sentence) {
            match part {
                SentencePart::Text(text) => {
                    ui.label(text);
                }
                SentencePart::Blank => {
                    let shown = if reveal.is_revealed(id) {
                        RichText::new(&exercise.answer).color(HIGHLIGHT_COLOR).strong()
                    } else {
                        RichText::new("_____").strong()
                    };
                    hovered |= ui.add(egui::Label::new(shown).sense(egui::Sense::hover())).hovered();
                }
            }
        }
    });
    ui.label(RichText::new(&exercise.translation).italics().weak());

    let was_revealed = reveal.is_revealed(id);
    if hovered {
        reveal.enter(id);
    } else {
        reveal.leave(id);
    }
    if was_revealed != reveal.is_revealed(id) {
        ui.ctx().request_repaint();
    }
}

pub(super) fn grammar_page(
    ui: &mut egui::Ui,
    key: LessonKey,
    lesson: &GrammarLesson,
    reveal: &mut BlankRevealState,
    requested: &mut Option<Route>,
) {
    lesson_header(ui, key, ViewKind::Grammar);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(lesson.topic.title()).size(20.0));
    });

    ui.heading("Example Sentences");
    for example in &lesson.examples {
        ui.label(RichText::new(&example.original).strong());
        ui.label(RichText::new(&example.translation).italics());
        ui.add_space(4.0);
    }
    ui.separator();

    ui.heading("Fill in the Blank");
    for (index, exercise) in lesson.blanks.iter().enumerate() {
        let id = BlankId {
            section: ExerciseSection::FillInTheBlank,
            index,
        };
        blank_line(ui, exercise, id, reveal);
        ui.add_space(4.0);
    }
    ui.separator();

    ui.heading("Word-for-Word Translations");
    for pair in &lesson.word_for_word {
        ui.label(RichText::new(&pair.original).strong());
        ui.label(&pair.literal);
        ui.add_space(4.0);
    }
    ui.separator();

    ui.heading(format!("{} Exercises", lesson.topic.title()));
    for (index, exercise) in lesson.topic_exercises.iter().enumerate() {
        let id = BlankId {
            section: ExerciseSection::TopicExercise,
            index,
        };
        blank_line(ui, exercise, id, reveal);
        ui.add_space(4.0);
    }

    cross_links(ui, key, ViewKind::Grammar, requested);
}

pub(super) fn reading_page(ui: &mut egui::Ui, key: LessonKey, page: &ReadingPage, requested: &mut Option<Route>) {
    lesson_header(ui, key, ViewKind::Reading);
    let name = key.language.name();
    for (number, level) in [
        ImmersionLevel::Bilingual30,
        ImmersionLevel::Bilingual50,
        ImmersionLevel::Full,
    ]
    .into_iter()
    .enumerate()
    {
        let title = if level.is_highlighted() {
            format!("Story {}: Bilingual ({}% {})", number + 1, level.percent(), name)
        } else {
            format!("Story {}: Full {}", number + 1, name)
        };
        ui.heading(title);
        ui.horizontal_wrapped(|ui| {
            for token in highlight_story(&page.stories, level, &page.highlights) {
                let text = match token.class {
                    TokenClass::Highlighted => RichText::new(token.text).color(HIGHLIGHT_COLOR).strong(),
                    TokenClass::Plain => RichText::new(token.text),
                };
                ui.label(text);
            }
        });
        ui.add_space(12.0);
    }
    cross_links(ui, key, ViewKind::Reading, requested);
}

pub(super) fn writing_page(
    ui: &mut egui::Ui,
    key: LessonKey,
    prompts: &[String],
    notes: &mut NoteBuffer,
    requested: &mut Option<Route>,
) {
    lesson_header(ui, key, ViewKind::Writing);
    ui.columns(2, |columns| {
        columns[0].heading("Writing Prompts");
        for (i, prompt) in prompts.iter().enumerate() {
            columns[0].label(format!("{}. {}", i + 1, prompt));
        }
        columns[1].heading("Your Writing Space");
        note_pad(&mut columns[1], "writing_space", notes, "Start writing here...");
    });
    ui.add_space(12.0);
    ui.heading("Writing Tips");
    for tip in WRITING_TIPS {
        ui.label(format!("• {}", tip));
    }
    cross_links(ui, key, ViewKind::Writing, requested);
}
