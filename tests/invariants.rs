//! Property tests for catalog-wide invariants.

mod common;

use common::{BASELINE, assessor};
use proptest::prelude::*;
use taxonomy::{Catalog, Paper, PaperAttributes, ids};

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("the".to_string()),
        Just("of".to_string()),
        Just("keyword".to_string()),
        Just("cat".to_string()),
        Just("food".to_string()),
        "[a-z]{1,8}",
    ]
}

fn phrase(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..=max_words).prop_map(|words| words.join(" "))
}

fn body() -> impl Strategy<Value = String> {
    prop_oneof![
        phrase(20),
        phrase(140),
        phrase(10).prop_map(|p| format!("<h1>{p}</h1><h1>Second</h1><p>{p}</p>")),
    ]
}

fn url() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        phrase(3).prop_map(|p| p.replace(' ', "-")),
        phrase(15).prop_map(|p| format!("https://example.com/{}", p.replace(' ', "-"))),
    ]
}

prop_compose! {
    fn arb_paper()(
        text in body(),
        keyword in phrase(4),
        title in phrase(6),
        url in url(),
        description in phrase(12),
        title_width in 0u32..800,
    ) -> Paper {
        Paper::new(
            text,
            PaperAttributes::new()
                .keyword(keyword)
                .title(title)
                .url(url)
                .description(description)
                .title_width(title_width),
        )
    }
}

fn both_catalogs() -> [Catalog; 2] {
    [Catalog::standard(), Catalog::recalibration()]
}

proptest! {
    #[test]
    fn baseline_always_present_in_order(paper in arb_paper()) {
        for catalog in both_catalogs() {
            let mut assessor = assessor(catalog);
            assessor.assess(&paper);

            let baseline: Vec<_> = assessor
                .valid_identifiers()
                .into_iter()
                .filter(|id| BASELINE.contains(id))
                .collect();
            prop_assert_eq!(baseline, BASELINE.to_vec());
        }
    }

    #[test]
    fn introduction_and_function_words_exclusive(paper in arb_paper()) {
        for catalog in both_catalogs() {
            let mut assessor = assessor(catalog);
            assessor.assess(&paper);

            let valid = assessor.valid_identifiers();
            prop_assert!(
                !(valid.contains(&ids::INTRODUCTION_KEYWORD)
                    && valid.contains(&ids::FUNCTION_WORDS_IN_KEYPHRASE))
            );
        }
    }

    #[test]
    fn recalibration_never_reports_slug_checks(paper in arb_paper()) {
        let mut assessor = assessor(Catalog::recalibration());
        assessor.assess(&paper);

        let valid = assessor.valid_identifiers();
        prop_assert!(!valid.contains(&ids::URL_LENGTH));
        prop_assert!(!valid.contains(&ids::URL_STOP_WORDS));
    }

    #[test]
    fn valid_results_follow_catalog_order(paper in arb_paper()) {
        for catalog in both_catalogs() {
            let order = catalog.identifiers();
            let mut assessor = assessor(catalog);
            assessor.assess(&paper);

            let positions: Vec<usize> = assessor
                .valid_identifiers()
                .iter()
                .map(|id| order.iter().position(|o| o == id).expect("registered identifier"))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn assess_is_idempotent(paper in arb_paper()) {
        for catalog in both_catalogs() {
            let mut assessor = assessor(catalog);
            assessor.assess(&paper);
            let first = assessor.results().to_vec();
            assessor.assess(&paper);
            prop_assert_eq!(assessor.results(), first.as_slice());
        }
    }

    #[test]
    fn builtin_scorers_never_fail_when_applicable(paper in arb_paper()) {
        for catalog in both_catalogs() {
            let mut assessor = assessor(catalog);
            assessor.assess(&paper);
            prop_assert!(assessor.results().iter().all(|o| !o.is_failed()));
        }
    }
}
