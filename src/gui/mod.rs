//! Desktop front end. Every page is a pure function of the active route plus
//! the per-page state in [`ActivePage`]; navigation rebuilds that state.

mod info;
mod lesson;

use eframe::App;
use egui::{Key, ViewportCommand};

use crate::config::Config;
use crate::content::ContentStore;
use crate::router::{Navigator, Route};
use crate::view::ActivePage;

pub const WINDOW_TITLE: &str = "Word Wide Web";

pub struct WordWideWebApp {
    config: Config,
    config_error: Option<String>,
    store: ContentStore,
    navigator: Navigator,
    page: ActivePage,
    address: String,
    scroll_to_top: bool,
}

impl WordWideWebApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        config_error: Option<String>,
        store: ContentStore,
        start: Route,
    ) -> Self {
        let navigator = Navigator::new(start);
        let page = ActivePage::build(start, &store);
        Self {
            address: navigator.location(),
            config,
            config_error,
            store,
            navigator,
            page,
            scroll_to_top: true,
        }
    }

    fn navigate(&mut self, route: Route) {
        let effect = self.navigator.navigate(route);
        self.page = ActivePage::build(route, &self.store);
        self.address = format!("#{}", effect.fragment);
        self.scroll_to_top = effect.scroll_to_top;
    }
}

impl App for WordWideWebApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut requested: Option<Route> = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                    }
                });
                for (label, route) in [
                    ("Home", Route::Main),
                    ("About", Route::About),
                    ("How It Works", Route::How),
                    ("Contact", Route::Contact),
                ] {
                    if ui.selectable_label(self.navigator.current() == route, label).clicked() {
                        requested = Some(route);
                    }
                }
                ui.separator();
                let response = ui.add(egui::TextEdit::singleline(&mut self.address).desired_width(220.0));
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    requested = Some(Route::parse(&self.address));
                }
            });
            if let Some(err) = &self.config_error {
                ui.colored_label(egui::Color32::RED, format!("Config: {}", err));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .auto_shrink([false, false]);
            if self.scroll_to_top {
                scroll = scroll.vertical_scroll_offset(0.0);
                self.scroll_to_top = false;
            }
            scroll.show(ui, |ui| match &mut self.page {
                ActivePage::Main => info::main_page(ui, &mut requested),
                ActivePage::About => info::about_page(ui, &self.config, &mut requested),
                ActivePage::How => info::how_page(ui, &self.config, &mut requested),
                ActivePage::Contact => info::contact_page(ui, &self.config, &mut requested),
                ActivePage::LessonList(lang) => info::lesson_list(ui, *lang, &self.config, &mut requested),
                ActivePage::Vocab { key, deck, notes } => {
                    lesson::vocab_page(ui, *key, deck, notes, &mut requested)
                }
                ActivePage::Test { key, deck, notes } => lesson::test_page(ui, *key, deck, notes, &mut requested),
                ActivePage::Grammar { key, lesson, reveal } => {
                    lesson::grammar_page(ui, *key, lesson, reveal, &mut requested)
                }
                ActivePage::Reading { key, page } => lesson::reading_page(ui, *key, page, &mut requested),
                ActivePage::Writing { key, prompts, notes } => {
                    lesson::writing_page(ui, *key, prompts, notes, &mut requested)
                }
            });
        });

        if let Some(route) = requested {
            self.navigate(route);
        }
    }
}

/// Button that asks for a navigation once the frame is drawn.
fn page_button(ui: &mut egui::Ui, label: &str, route: Route, requested: &mut Option<Route>) {
    if ui.button(label).clicked() {
        *requested = Some(route);
    }
}

fn footer(ui: &mut egui::Ui, config: &Config, requested: &mut Option<Route>) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        page_button(ui, "Home Page", Route::Main, requested);
        if ui.button("Buy Me a Coffee").clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(&config.donate_url));
        }
    });
}
