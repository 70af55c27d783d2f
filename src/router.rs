//! Fragment routing.
//!
//! The fragment grammar is the whole addressable surface of the app:
//!
//! ```text
//! main | about | how | contact | <lang> | <kind>-<lang>-<lesson>
//! kind   := vocab | grammar | reading | writing | test
//! lang   := nl | it | sp | de
//! lesson := 1..=50
//! ```
//!
//! Parsing never fails. Anything outside the grammar routes to the main page.

use serde::Serialize;
use std::fmt;

use crate::types::language::{LanguageCode, LessonNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    Vocab,
    Grammar,
    Reading,
    Writing,
    Test,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Vocab,
        ViewKind::Grammar,
        ViewKind::Reading,
        ViewKind::Writing,
        ViewKind::Test,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ViewKind::Vocab => "vocab",
            ViewKind::Grammar => "grammar",
            ViewKind::Reading => "reading",
            ViewKind::Writing => "writing",
            ViewKind::Test => "test",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ViewKind> {
        ViewKind::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Vocab => "Vocabulary",
            ViewKind::Grammar => "Grammar",
            ViewKind::Reading => "Reading",
            ViewKind::Writing => "Writing",
            ViewKind::Test => "Test",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Main,
    About,
    How,
    Contact,
    LanguageList(LanguageCode),
    Lesson {
        kind: ViewKind,
        language: LanguageCode,
        lesson: LessonNumber,
    },
}

impl Route {
    /// Parses a fragment, with or without its leading `#`.
    pub fn parse(fragment: &str) -> Route {
        let id = fragment.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        match id {
            "main" => Route::Main,
            "about" => Route::About,
            "how" => Route::How,
            "contact" => Route::Contact,
            _ => {
                if let Some(lang) = LanguageCode::from_code(id) {
                    return Route::LanguageList(lang);
                }
                Self::parse_lesson(id).unwrap_or(Route::Main)
            }
        }
    }

    fn parse_lesson(id: &str) -> Option<Route> {
        let mut parts = id.split('-');
        let kind = ViewKind::from_slug(parts.next()?)?;
        let language = LanguageCode::from_code(parts.next()?)?;
        let lesson_str = parts.next()?;
        if parts.next().is_some() || !lesson_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let lesson = LessonNumber::new(lesson_str.parse().ok()?)?;
        Some(Route::Lesson { kind, language, lesson })
    }

    /// The canonical fragment, without `#`.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Main => "main".to_string(),
            Route::About => "about".to_string(),
            Route::How => "how".to_string(),
            Route::Contact => "contact".to_string(),
            Route::LanguageList(lang) => lang.code().to_string(),
            Route::Lesson { kind, language, lesson } => {
                format!("{}-{}-{}", kind.slug(), language.code(), lesson)
            }
        }
    }

    pub fn language(&self) -> Option<LanguageCode> {
        match self {
            Route::LanguageList(lang) => Some(*lang),
            Route::Lesson { language, .. } => Some(*language),
            _ => None,
        }
    }

    pub fn lesson(&self) -> Option<LessonNumber> {
        match self {
            Route::Lesson { lesson, .. } => Some(*lesson),
            _ => None,
        }
    }

    /// Same lesson, different page.
    pub fn sibling(&self, kind: ViewKind) -> Option<Route> {
        match self {
            Route::Lesson { language, lesson, .. } => Some(Route::Lesson {
                kind,
                language: *language,
                lesson: *lesson,
            }),
            _ => None,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Main
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

/// What the front end must do after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEffect {
    pub fragment: String,
    pub scroll_to_top: bool,
}

/// Holds the current route and the shareable location string that mirrors it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    location: String,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Navigator {
            current: start,
            location: start.to_fragment(),
        }
    }

    /// Reads the initial fragment once at startup; `None` starts on main.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        Navigator::new(fragment.map(Route::parse).unwrap_or_default())
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Location reference, e.g. `#test-de-3`.
    pub fn location(&self) -> String {
        format!("#{}", self.location)
    }

    pub fn navigate(&mut self, route: Route) -> NavigationEffect {
        log::debug!("Navigating {} -> {}", self.current, route);
        self.current = route;
        self.location = route.to_fragment();
        NavigationEffect {
            fragment: self.location.clone(),
            scroll_to_top: true,
        }
    }

    pub fn navigate_to(&mut self, fragment: &str) -> NavigationEffect {
        self.navigate(Route::parse(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_fragment() {
        assert_eq!(
            Route::parse("test-de-3"),
            Route::Lesson {
                kind: ViewKind::Test,
                language: LanguageCode::German,
                lesson: LessonNumber::new(3).unwrap(),
            }
        );
    }

    #[test]
    fn unknown_fragments_go_home() {
        for id in [
            "unknown-page",
            "",
            "vocab-fr-1",
            "vocab-nl-0",
            "vocab-nl-51",
            "vocab-nl-",
            "vocab-nl-1-2",
            "vocab-nl-+1",
            "VOCAB-nl-1",
            "grammar-nl",
            "es",
        ] {
            assert_eq!(Route::parse(id), Route::Main, "fragment {id:?}");
        }
    }

    #[test]
    fn bare_identifiers() {
        assert_eq!(Route::parse("about"), Route::About);
        assert_eq!(Route::parse("how"), Route::How);
        assert_eq!(Route::parse("contact"), Route::Contact);
        assert_eq!(Route::parse("#sp"), Route::LanguageList(LanguageCode::Spanish));
    }

    #[test]
    fn fragments_round_trip() {
        for id in ["main", "about", "how", "contact", "nl", "vocab-it-50", "reading-sp-7"] {
            assert_eq!(Route::parse(id).to_fragment(), id);
        }
    }

    #[test]
    fn navigation_updates_location_and_scrolls() {
        let mut nav = Navigator::from_fragment(None);
        assert_eq!(nav.current(), Route::Main);
        let effect = nav.navigate_to("#writing-nl-2");
        assert_eq!(effect.fragment, "writing-nl-2");
        assert!(effect.scroll_to_top);
        assert_eq!(nav.location(), "#writing-nl-2");

        let sibling = nav.current().sibling(ViewKind::Grammar).unwrap();
        nav.navigate(sibling);
        assert_eq!(nav.location(), "#grammar-nl-2");

        nav.navigate_to("nonsense");
        assert_eq!(nav.location(), "#main");
    }
}
