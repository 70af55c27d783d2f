use egui::RichText;

use super::{footer, page_button};
use crate::config::Config;
use crate::router::{Route, ViewKind};
use crate::types::language::{LanguageCode, LessonNumber};

const METHOD_POINTS: &[&str] = &[
    "Paper & pen are essential - write everything down to commit it to memory",
    "Learn high-frequency words first with our carefully curated vocabulary lists",
    "Understand word connections through etymology and memory aids",
    "Practice with structured grammar lessons and immersive reading",
    "Test your knowledge with interactive exercises, but always write answers in your notebook",
    "Progress through 50 carefully structured lessons with 50 unique words per lesson to reach B2 proficiency",
];

const ABOUT_TEXT: &[&str] = &[
    "Hi. I'm Kevan, a wannabe polyglot speaking English, Dutch, ASL, Italian & Albanian at different levels. I made this site to help language learners like myself.",
    "I realized nothing can replace the old-fashioned methods of using pen & paper to learn a language. The gamification of language learning helps, but etymology-based memory tools aren't being used much these days. This site cannot replace interacting with a native, and alone with this site, you will not become fluent. But if you are studious, I predict it will give you a head start.",
    "I'm creating a website that I wish I would have had when I first learned my second language at age 18. The site is designed to be minimalistic. All you need is your laptop/mobile device, a dedicated notebook, and a writing utensil. Good luck on your language learning adventure!",
    "I'm not a web developer. I'm a copywriter. But I tried my best to make this. Be kind with your feedback.",
];

const HOW_TEXT: &[&str] = &[
    "Paper & pen to start.",
    "Select the language you want to learn and pick the lesson you want to complete. We suggest starting from one and working your way up to the final lesson. Keep track of your progress in your notebook. You can learn new vocabulary, practice reading, learn grammar, practice typing, and be tested on the words you've learned for each section. Each section has 50 words that you'll be working with.",
    "This is designed for beginners who want to get to an intermediate level in the provided languages; from there, you'll be able to learn on your own. This is a study tool. It will take effort on your part. And it's that effort that will help you progress further. Learning languages isn't easy. It's work.",
    "Using this etymology-based approach, we hope that you can speed up your learning journey. All you have to be is studious.",
];

fn banner(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(title).size(32.0).strong());
    });
    ui.separator();
}

fn paragraphs(ui: &mut egui::Ui, text: &[&str]) {
    for paragraph in text {
        ui.label(*paragraph);
        ui.add_space(8.0);
    }
}

pub(super) fn main_page(ui: &mut egui::Ui, requested: &mut Option<Route>) {
    banner(ui, "WORD WIDE WEB");
    ui.heading("For Studious Language Learners");
    ui.label("Grab a pen and notebook. Seriously, you'll need it.");
    ui.separator();

    ui.heading("Old Fashioned Methods With a Modern Approach");
    ui.label(
        "We use etymology, memory tools, and word frequency to connect new words with words you already know. \
         Once you finish your free course we hope you'll be able to see the Word Wide Web.",
    );
    ui.separator();

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Choose a language to get started").strong());
        ui.horizontal(|ui| {
            for lang in LanguageCode::ALL {
                let label = format!("{} ({})", lang.name(), lang.code().to_uppercase());
                page_button(ui, &label, Route::LanguageList(lang), requested);
            }
        });
    });
    ui.separator();

    ui.heading("How Our Method Works");
    for point in METHOD_POINTS {
        ui.label(format!("• {}", point));
    }
}

pub(super) fn about_page(ui: &mut egui::Ui, config: &Config, requested: &mut Option<Route>) {
    banner(ui, "ABOUT WWW");
    paragraphs(ui, ABOUT_TEXT);
    footer(ui, config, requested);
}

pub(super) fn how_page(ui: &mut egui::Ui, config: &Config, requested: &mut Option<Route>) {
    banner(ui, "HOW IT WORKS");
    paragraphs(ui, HOW_TEXT);
    footer(ui, config, requested);
}

pub(super) fn contact_page(ui: &mut egui::Ui, config: &Config, requested: &mut Option<Route>) {
    banner(ui, "CONTACT US");
    ui.vertical_centered(|ui| {
        if ui.button(RichText::new("✉").size(48.0)).clicked() {
            ui.ctx().open_url(egui::OpenUrl::same_tab(config.mailto()));
        }
        ui.label("Click the email icon above to contact us");
        ui.add_space(16.0);
        ui.heading("Connect With Us");
        ui.label(
            "Have questions about our language learning methods? Want to suggest improvements? \
             We'd love to hear from you!",
        );
        ui.label(format!("Email: {}", config.contact_email));
    });
    footer(ui, config, requested);
}

pub(super) fn lesson_list(
    ui: &mut egui::Ui,
    lang: LanguageCode,
    config: &Config,
    requested: &mut Option<Route>,
) {
    banner(ui, "WORD WIDE WEB");
    ui.vertical_centered(|ui| {
        ui.heading(format!("Learn {}", lang.name()));
        ui.label("Remember to track your own progress");
        ui.label(RichText::new("Lessons").underline().size(20.0));
    });

    egui::Grid::new("lesson_list")
        .num_columns(ViewKind::ALL.len() + 1)
        .spacing([12.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for lesson in LessonNumber::all() {
                ui.label(RichText::new(lesson.to_string()).strong().size(20.0));
                for kind in ViewKind::ALL {
                    page_button(
                        ui,
                        kind.title(),
                        Route::Lesson { kind, language: lang, lesson },
                        requested,
                    );
                }
                ui.end_row();
            }
        });
    footer(ui, config, requested);
}
