//! Parse collaborator responses.
//!
//! LLM output is untrusted: wrappers come and go, fields go missing. Both
//! parsers accept the documented shape and the common bare variant, and
//! leave anything stricter to the caller.

use indexmap::IndexMap;

use crate::types::category::{CategoryPatterns, UrlCategory, UrlTypeAnalysis};

/// Parse a categorizer response.
///
/// Accepts both `{"url_categories": {...}}` and the bare
/// `{"NAME": {"type": ..., "examples": [...]}}` mapping.
pub fn parse_categories_response(json: &str) -> Result<UrlTypeAnalysis, serde_json::Error> {
    #[derive(serde::Deserialize)]
    struct Wrapped {
        url_categories: Option<IndexMap<String, UrlCategory>>,
    }

    // Try the documented wrapper first. An explicitly-present empty map is
    // a valid answer (no categories found), not a parse failure.
    if let Ok(Wrapped {
        url_categories: Some(url_categories),
    }) = serde_json::from_str::<Wrapped>(json)
    {
        return Ok(UrlTypeAnalysis { url_categories });
    }

    // Fall back to a bare category mapping
    let url_categories: IndexMap<String, UrlCategory> = serde_json::from_str(json)?;
    Ok(UrlTypeAnalysis { url_categories })
}

/// Parse a pattern-generator response.
///
/// Accepts both the bare `{"NAME": {"regex": "..."}}` mapping and a
/// `{"patterns": {...}}` wrapper.
pub fn parse_patterns_response(json: &str) -> Result<CategoryPatterns, serde_json::Error> {
    if let Ok(patterns) = serde_json::from_str::<CategoryPatterns>(json) {
        return Ok(patterns);
    }

    #[derive(serde::Deserialize)]
    struct Wrapper {
        #[serde(default)]
        patterns: CategoryPatterns,
    }

    let wrapper: Wrapper = serde_json::from_str(json)?;
    Ok(wrapper.patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::category::UrlPattern;

    #[test]
    fn test_parse_categories_wrapped() {
        let json = r#"{
            "url_categories": {
                "DATA_PAGES": {"type": "listings", "examples": ["https://a/1"]}
            }
        }"#;

        let analysis = parse_categories_response(json).unwrap();
        assert_eq!(analysis.url_categories.len(), 1);
        assert_eq!(analysis.examples_for("DATA_PAGES").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_categories_wrapped_empty_is_ok() {
        let analysis = parse_categories_response(r#"{"url_categories": {}}"#).unwrap();
        assert!(analysis.url_categories.is_empty());
    }

    #[test]
    fn test_parse_categories_bare() {
        let json = r#"{"DATA_PAGES": {"type": "listings", "examples": []}}"#;

        let analysis = parse_categories_response(json).unwrap();
        assert_eq!(analysis.url_categories["DATA_PAGES"].kind, "listings");
    }

    #[test]
    fn test_parse_categories_garbage_is_error() {
        assert!(parse_categories_response("not json").is_err());
        assert!(parse_categories_response(r#"{"DATA_PAGES": "oops"}"#).is_err());
    }

    #[test]
    fn test_parse_patterns_bare() {
        let json = r#"{"LISTINGS": {"regex": "/p/\\d+$"}}"#;

        let patterns = parse_patterns_response(json).unwrap();
        assert_eq!(patterns["LISTINGS"], UrlPattern::new(r"/p/\d+$"));
    }

    #[test]
    fn test_parse_patterns_wrapped() {
        let json = r#"{"patterns": {"LISTINGS": {"regex": "/p/"}}}"#;

        let patterns = parse_patterns_response(json).unwrap();
        assert_eq!(patterns.len(), 1);
    }
}
