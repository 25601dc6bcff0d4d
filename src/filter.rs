//! Filter engine - partition discovered URLs by selected categories.
//!
//! A single-shot pure function over (all URLs, selected category names,
//! category definitions). No I/O, no shared state; every invocation builds
//! its result from scratch, so back-to-back or concurrent calls are
//! independent and the output is deterministic for identical inputs.
//!
//! Nothing here returns an error: unknown category names, missing
//! definitions, and uncompilable regexes all degrade to "contributes no
//! matches" so a single bad input never costs the caller the rest of the
//! batch.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::matcher;
use crate::types::category::{CategoryPatterns, UrlTypeAnalysis};
use crate::types::filter::{CategoryMatch, FilterResult, FilterStats};

/// Filter URLs by descriptive categories (examples-membership mode).
///
/// Every selected name appears in `category_matches`, even with zero
/// matches; names without a definition in `analysis` are skipped silently.
pub fn filter_by_categories<S: AsRef<str>>(
    urls: &[String],
    selected_categories: &[S],
    analysis: &UrlTypeAnalysis,
) -> FilterResult {
    filter_urls(urls, selected_categories, |name| {
        analysis
            .url_categories
            .get(name)
            .map(|category| CategoryTest::Examples(&category.examples))
    })
}

/// Filter URLs by generated regex patterns (regex mode).
///
/// Patterns may cover only a subset of the selected names (generation can
/// fail per category); missing or uncompilable patterns contribute nothing.
pub fn filter_by_patterns<S: AsRef<str>>(
    urls: &[String],
    selected_categories: &[S],
    patterns: &CategoryPatterns,
) -> FilterResult {
    filter_urls(urls, selected_categories, |name| {
        patterns
            .get(name)
            .map(|pattern| CategoryTest::Pattern(&pattern.regex))
    })
}

/// The per-category test, resolved once per category rather than per URL so
/// a regex compiles once per filter pass.
enum CategoryTest<'a> {
    Examples(&'a [String]),
    Pattern(&'a str),
}

fn filter_urls<'a, S, F>(urls: &[String], selected_categories: &[S], lookup: F) -> FilterResult
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<CategoryTest<'a>>,
{
    // Every selected category is represented in the output, defined or not.
    // A name selected twice is processed once.
    let mut category_matches: IndexMap<String, CategoryMatch> = IndexMap::new();
    for name in selected_categories {
        category_matches
            .entry(name.as_ref().to_string())
            .or_default();
    }

    // Global dedup set, insertion-ordered: first-seen across the category
    // iteration order above, then input URL order.
    let mut filtered_urls: Vec<String> = Vec::new();
    let mut matched_set: HashSet<&str> = HashSet::new();

    for (name, category_match) in category_matches.iter_mut() {
        let Some(test) = lookup(name) else {
            tracing::debug!(category = %name, "no definition for selected category, skipping");
            continue;
        };

        // Compile once per category; a bad pattern degrades to zero matches
        // for this category only.
        let compiled = match &test {
            CategoryTest::Pattern(source) => matcher::compile_pattern(source),
            CategoryTest::Examples(_) => None,
        };

        for url in urls {
            let hit = match &test {
                CategoryTest::Examples(examples) => matcher::match_by_examples(url, examples),
                CategoryTest::Pattern(_) => compiled
                    .as_ref()
                    .map(|regex| regex.is_match(url))
                    .unwrap_or(false),
            };

            if hit {
                category_match.urls.push(url.clone());
                if matched_set.insert(url) {
                    filtered_urls.push(url.clone());
                }
            }
        }
    }

    let stats = FilterStats {
        total_urls: urls.len(),
        filtered_urls: filtered_urls.len(),
    };

    FilterResult {
        filtered_urls,
        category_matches,
        stats,
    }
}
