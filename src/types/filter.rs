//! Filter result types - the output shapes downstream stages consume.
//!
//! `FilterResult` is the sole artifact the later wizard stages (tree view,
//! scrape-target selection, test-run sampling) read. Its serialized field
//! names (`filteredUrls`, `categoryMatches`, `stats`) are the stable wire
//! shape; nothing else about the nesting is guaranteed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which matching rule fired for a (URL, category) test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Byte-exact membership in the category's example list
    Examples,
    /// Case-insensitive regex search over the whole URL
    Regex,
    /// Wildcard pattern over the parsed URL path
    Path,
    /// Case-insensitive keyword substring
    Indicators,
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Examples => "examples",
            Self::Regex => "regex",
            Self::Path => "path",
            Self::Indicators => "indicators",
        };
        f.write_str(name)
    }
}

/// Outcome of testing one URL against one category.
///
/// `matched_by` is empty iff `matches` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub matches: bool,
    pub matched_by: Vec<MatchRule>,
}

impl MatchResult {
    /// A non-match.
    pub fn none() -> Self {
        Self {
            matches: false,
            matched_by: Vec::new(),
        }
    }

    /// Build a result from the rules that fired.
    pub fn from_rules(rules: Vec<MatchRule>) -> Self {
        Self {
            matches: !rules.is_empty(),
            matched_by: rules,
        }
    }
}

/// URLs that matched one category, in input order.
///
/// Built fresh per filter invocation and never mutated afterwards. The same
/// URL may also appear in other categories' lists (no exclusivity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Aggregate counts for one filter invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    /// Raw input URL count, duplicates included
    pub total_urls: usize,

    /// Distinct matched URL count (`filtered_urls.len()`)
    pub filtered_urls: usize,
}

/// The filter engine's output: global deduplicated view plus per-category
/// breakdown.
///
/// The per-category view answers "why did this URL match"; the global view
/// answers "what is the complete scrape target set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// Matched URLs, deduplicated, in first-matched order
    #[serde(default)]
    pub filtered_urls: Vec<String>,

    /// Per-category matches, one entry per selected category name
    #[serde(default)]
    pub category_matches: IndexMap<String, CategoryMatch>,

    pub stats: FilterStats,
}

impl FilterResult {
    /// Matches for a category by name.
    pub fn category(&self, name: &str) -> Option<&CategoryMatch> {
        self.category_matches.get(name)
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.filtered_urls.is_empty()
    }
}
