//! Property tests for the filter engine's aggregate guarantees.

use std::collections::HashSet;

use proptest::prelude::*;

use urlsift::{
    filter_by_categories, filter_by_patterns, CategoryPatterns, UrlCategory, UrlPattern,
    UrlTypeAnalysis,
};

/// Small URL universe so inputs overlap often.
fn arb_url() -> impl Strategy<Value = String> {
    (0u8..20).prop_map(|i| format!("https://site.test/p/{i}"))
}

fn arb_urls() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_url(), 0..40)
}

fn arb_category_name() -> impl Strategy<Value = String> {
    (0u8..6).prop_map(|i| format!("CAT_{i}"))
}

/// An analysis whose categories hold example URLs from the same universe.
fn arb_analysis() -> impl Strategy<Value = UrlTypeAnalysis> {
    proptest::collection::btree_map(
        arb_category_name(),
        proptest::collection::vec(arb_url(), 0..5),
        0..6,
    )
    .prop_map(|map| {
        let mut analysis = UrlTypeAnalysis::new();
        for (name, examples) in map {
            analysis = analysis.with_category(name, UrlCategory::new("pages").with_examples(examples));
        }
        analysis
    })
}

fn arb_selected() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_category_name(), 0..6)
}

proptest! {
    #[test]
    fn total_urls_equals_raw_input_length(
        urls in arb_urls(),
        selected in arb_selected(),
        analysis in arb_analysis(),
    ) {
        let result = filter_by_categories(&urls, &selected, &analysis);
        prop_assert_eq!(result.stats.total_urls, urls.len());
    }

    #[test]
    fn filtered_urls_are_distinct_and_counted(
        urls in arb_urls(),
        selected in arb_selected(),
        analysis in arb_analysis(),
    ) {
        let result = filter_by_categories(&urls, &selected, &analysis);

        let distinct: HashSet<&String> = result.filtered_urls.iter().collect();
        prop_assert_eq!(distinct.len(), result.filtered_urls.len());
        prop_assert_eq!(result.stats.filtered_urls, result.filtered_urls.len());
    }

    #[test]
    fn every_selected_category_is_keyed(
        urls in arb_urls(),
        selected in arb_selected(),
        analysis in arb_analysis(),
    ) {
        let result = filter_by_categories(&urls, &selected, &analysis);
        for name in &selected {
            prop_assert!(result.category(name).is_some());
        }
    }

    #[test]
    fn filtering_is_idempotent(
        urls in arb_urls(),
        selected in arb_selected(),
        analysis in arb_analysis(),
    ) {
        let first = filter_by_categories(&urls, &selected, &analysis);
        let second = filter_by_categories(&urls, &selected, &analysis);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adding_a_category_never_removes_matches(
        urls in arb_urls(),
        selected in arb_selected(),
        analysis in arb_analysis(),
        extra_examples in proptest::collection::vec(arb_url(), 1..5),
    ) {
        let base = filter_by_categories(&urls, &selected, &analysis);

        let grown = analysis.clone().with_category(
            "CAT_EXTRA",
            UrlCategory::new("extra").with_examples(extra_examples),
        );
        let mut selected_grown = selected.clone();
        selected_grown.push("CAT_EXTRA".to_string());

        let result = filter_by_categories(&urls, &selected_grown, &grown);

        let after: HashSet<&String> = result.filtered_urls.iter().collect();
        for url in &base.filtered_urls {
            prop_assert!(after.contains(url));
        }
        prop_assert!(result.stats.filtered_urls >= base.stats.filtered_urls);
    }

    #[test]
    fn malformed_regex_does_not_affect_other_categories(
        urls in arb_urls(),
    ) {
        let good_only: CategoryPatterns =
            CategoryPatterns::from([("GOOD".to_string(), UrlPattern::new(r"/p/1"))]);
        let with_broken: CategoryPatterns = CategoryPatterns::from([
            ("GOOD".to_string(), UrlPattern::new(r"/p/1")),
            ("BROKEN".to_string(), UrlPattern::new("(unclosed")),
        ]);

        let baseline = filter_by_patterns(&urls, &["GOOD"], &good_only);
        let mixed = filter_by_patterns(&urls, &["GOOD", "BROKEN"], &with_broken);

        prop_assert_eq!(
            baseline.category("GOOD").unwrap(),
            mixed.category("GOOD").unwrap()
        );
        prop_assert!(mixed.category("BROKEN").unwrap().urls.is_empty());
        prop_assert_eq!(&baseline.filtered_urls, &mixed.filtered_urls);
    }

    #[test]
    fn pattern_mode_matches_are_a_subset_of_inputs(
        urls in arb_urls(),
    ) {
        let patterns: CategoryPatterns =
            CategoryPatterns::from([("ANY".to_string(), UrlPattern::new(r"/p/\d+"))]);

        let result = filter_by_patterns(&urls, &["ANY"], &patterns);

        let inputs: HashSet<&String> = urls.iter().collect();
        for url in &result.filtered_urls {
            prop_assert!(inputs.contains(url));
        }
    }
}
