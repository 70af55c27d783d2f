use proptest::prelude::*;

use wordwideweb::router::{Route, ViewKind};
use wordwideweb::{LanguageCode, LessonNumber};

fn route() -> impl Strategy<Value = Route> {
    let lesson_route = (
        prop::sample::select(ViewKind::ALL.to_vec()),
        prop::sample::select(LanguageCode::ALL.to_vec()),
        1u32..=50,
    )
        .prop_map(|(kind, language, n)| Route::Lesson {
            kind,
            language,
            lesson: LessonNumber::new(n).unwrap(),
        });
    prop_oneof![
        Just(Route::Main),
        Just(Route::About),
        Just(Route::How),
        Just(Route::Contact),
        prop::sample::select(LanguageCode::ALL.to_vec()).prop_map(Route::LanguageList),
        lesson_route,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fragment_round_trip(route in route()) {
        prop_assert_eq!(Route::parse(&route.to_fragment()), route);
        prop_assert_eq!(Route::parse(&format!("#{}", route)), route);
    }

    #[test]
    fn prop_out_of_range_lessons_go_home(n in prop_oneof![Just(0u32), 51u32..10_000]) {
        prop_assert_eq!(Route::parse(&format!("vocab-nl-{n}")), Route::Main);
    }

    #[test]
    fn prop_parse_never_panics(fragment in "\\PC{0,24}") {
        let route = Route::parse(&fragment);
        prop_assert_eq!(Route::parse(&route.to_fragment()), route);
    }
}
