//! Category matcher - decide whether one URL belongs to one category.
//!
//! Two matching modes, selected by which category representation the caller
//! holds (a tagged rule, not probed optional fields):
//!
//! - **Examples membership**: byte-exact string equality against the
//!   category's example URLs. Examples are drawn from the same discovered
//!   set, so exact identity is sufficient and avoids loose-match false
//!   positives. No trimming, no normalization.
//! - **Regex**: case-insensitive search over the whole URL string. The
//!   regex source comes from an untrusted inference step and is compiled
//!   defensively: a bad pattern logs a warning and counts as non-match for
//!   that pair only. A single malformed pattern must never abort the batch.
//!
//! Auxiliary rules (path wildcards, keyword indicators) exist for callers
//! that want looser diagnostics; the filter engine does not consult them.

use regex::{Regex, RegexBuilder};

use crate::types::category::{UrlCategory, UrlPattern};
use crate::types::filter::{MatchRule, MatchResult};
use crate::urls::ParsedUrl;

/// A category's matching rule, dispatched on the tag.
#[derive(Debug, Clone, Copy)]
pub enum CategoryRule<'a> {
    /// Membership in an example URL list
    Examples(&'a [String]),

    /// A single regex source over the whole URL
    Pattern(&'a str),
}

/// Test one URL against one rule.
pub fn match_rule(url: &str, rule: CategoryRule<'_>) -> MatchResult {
    let mut fired = Vec::new();

    match rule {
        CategoryRule::Examples(examples) => {
            if match_by_examples(url, examples) {
                fired.push(MatchRule::Examples);
            }
        }
        CategoryRule::Pattern(regex) => {
            if match_by_regex(url, regex) {
                fired.push(MatchRule::Regex);
            }
        }
    }

    MatchResult::from_rules(fired)
}

/// Test one URL against a descriptive category (examples membership).
pub fn match_category(url: &str, category: &UrlCategory) -> MatchResult {
    match_rule(url, CategoryRule::Examples(&category.examples))
}

/// Test one URL against a pattern category (regex).
pub fn match_pattern(url: &str, pattern: &UrlPattern) -> MatchResult {
    match_rule(url, CategoryRule::Pattern(&pattern.regex))
}

/// Byte-exact membership in the example list.
pub fn match_by_examples(url: &str, examples: &[String]) -> bool {
    examples.iter().any(|example| example == url)
}

/// Case-insensitive regex search over the whole URL.
///
/// An uncompilable pattern is logged and treated as non-match.
pub fn match_by_regex(url: &str, pattern: &str) -> bool {
    match compile_pattern(pattern) {
        Some(regex) => regex.is_match(url),
        None => false,
    }
}

/// Compile a caller-supplied pattern case-insensitively.
///
/// Returns `None` on failure so one bad pattern degrades to zero matches
/// instead of poisoning the whole filter pass.
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(pattern, error = %err, "invalid regex pattern, treating as non-match");
            None
        }
    }
}

/// Match the parsed URL path against wildcard patterns (`*` matches any
/// run of characters; everything else is literal). Patterns anchor at the
/// start of the path. Unparseable URLs never match.
pub fn match_by_path(url: &str, path_patterns: &[String]) -> bool {
    if path_patterns.is_empty() {
        return false;
    }

    let Some(parsed) = ParsedUrl::parse(url) else {
        tracing::warn!(url, "unparseable URL, skipping path match");
        return false;
    };

    path_patterns.iter().any(|pattern| {
        let source = format!("^{}", wildcard_to_regex(pattern));
        compile_pattern(&source)
            .map(|regex| regex.is_match(&parsed.path))
            .unwrap_or(false)
    })
}

/// Case-insensitive keyword substring match over the whole URL.
pub fn match_by_indicators(url: &str, indicators: &[String]) -> bool {
    if indicators.is_empty() {
        return false;
    }

    let url_lower = url.to_lowercase();
    indicators
        .iter()
        .any(|indicator| url_lower.contains(&indicator.to_lowercase()))
}

/// Escape a wildcard pattern into a regex source, `*` becoming `.*`.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            c if regex_syntax_char(c) => {
                source.push('\\');
                source.push(c);
            }
            c => source.push(c),
        }
    }
    source
}

fn regex_syntax_char(c: char) -> bool {
    matches!(
        c,
        '.' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_require_exact_equality() {
        let examples = vec![
            "https://a.com/props/1".to_string(),
            "https://a.com/props/2".to_string(),
        ];

        assert!(match_by_examples("https://a.com/props/1", &examples));
        // Trailing slash differs: not a match, by design.
        assert!(!match_by_examples("https://a.com/props/1/", &examples));
        assert!(!match_by_examples("HTTPS://A.COM/PROPS/1", &examples));
        assert!(!match_by_examples("https://a.com/props/3", &examples));
    }

    #[test]
    fn test_regex_is_case_insensitive_search() {
        assert!(match_by_regex("https://a.com/PROPS/123", r"/props/\d+$"));
        assert!(match_by_regex("https://a.com/props/123", "props"));
        assert!(!match_by_regex("https://a.com/about", r"/props/\d+$"));
    }

    #[test]
    fn test_invalid_regex_degrades_to_non_match() {
        assert!(!match_by_regex("https://a.com/props/1", "(unclosed"));
        assert!(compile_pattern("[a-").is_none());
    }

    #[test]
    fn test_match_category_reports_rule() {
        let category = crate::types::category::UrlCategory::new("listings")
            .with_examples(["https://a.com/x"]);

        let hit = match_category("https://a.com/x", &category);
        assert!(hit.matches);
        assert_eq!(hit.matched_by, vec![MatchRule::Examples]);

        let miss = match_category("https://a.com/y", &category);
        assert!(!miss.matches);
        assert!(miss.matched_by.is_empty());
    }

    #[test]
    fn test_match_pattern_reports_rule() {
        let pattern = UrlPattern::new(r"/props/\d+");

        let hit = match_pattern("https://a.com/props/9", &pattern);
        assert_eq!(hit.matched_by, vec![MatchRule::Regex]);

        let miss = match_pattern("https://a.com/about", &pattern);
        assert!(!miss.matches);
    }

    #[test]
    fn test_match_by_path_wildcards() {
        let patterns = vec!["/props/*".to_string()];
        assert!(match_by_path("https://a.com/props/123", &patterns));
        assert!(match_by_path("https://a.com/PROPS/123", &patterns));
        assert!(!match_by_path("https://a.com/about", &patterns));
        // Unparseable URL degrades, no panic.
        assert!(!match_by_path("not a url", &patterns));
    }

    #[test]
    fn test_match_by_path_escapes_literals() {
        let patterns = vec!["/a.b/*".to_string()];
        assert!(match_by_path("https://a.com/a.b/x", &patterns));
        assert!(!match_by_path("https://a.com/axb/x", &patterns));
    }

    #[test]
    fn test_match_by_indicators() {
        let indicators = vec!["Listing".to_string(), "property".to_string()];
        assert!(match_by_indicators("https://a.com/listings/1", &indicators));
        assert!(match_by_indicators("https://a.com/PROPERTY/2", &indicators));
        assert!(!match_by_indicators("https://a.com/about", &indicators));
        assert!(!match_by_indicators("https://a.com/listings/1", &[]));
    }
}
