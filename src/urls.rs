//! URL parsing helpers.
//!
//! Wraps the `url` crate with the tolerance the filter pipeline needs:
//! malformed input yields `None`, never a panic or an error that could
//! abort a batch. Callers treat `None` as "unparseable" and move on.

use url::Url;

/// A parsed view of an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme plus host (plus port when present), e.g. `https://example.com`
    pub origin: String,

    /// Full path, always starting with `/`
    pub path: String,

    /// Non-empty path segments
    pub segments: Vec<String>,

    /// Raw query string without the `?`, if present
    pub query: Option<String>,

    /// Fragment without the `#`, if present
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Parse an absolute URL string.
    ///
    /// Returns `None` for anything the `url` crate rejects and for URLs
    /// without a host (e.g. `mailto:`), the explicit unparseable marker.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        let host = url.host_str()?;

        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        let path = url.path().to_string();
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        Some(Self {
            origin,
            path,
            segments,
            query: url.query().map(|q| q.to_string()),
            fragment: url.fragment().map(|f| f.to_string()),
        })
    }

    /// Host portion of the origin, e.g. `example.com`.
    pub fn host(&self) -> &str {
        self.origin
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.origin)
    }
}

/// Whether a string parses as an absolute URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    ParsedUrl::parse(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let parsed = ParsedUrl::parse("https://example.com/props/123?sort=price#top").unwrap();
        assert_eq!(parsed.origin, "https://example.com");
        assert_eq!(parsed.path, "/props/123");
        assert_eq!(parsed.segments, vec!["props", "123"]);
        assert_eq!(parsed.query.as_deref(), Some("sort=price"));
        assert_eq!(parsed.fragment.as_deref(), Some("top"));
        assert_eq!(parsed.host(), "example.com");
    }

    #[test]
    fn test_parse_root_url() {
        let parsed = ParsedUrl::parse("https://example.com").unwrap();
        assert_eq!(parsed.path, "/");
        assert!(parsed.segments.is_empty());
        assert!(parsed.query.is_none());
    }

    #[test]
    fn test_parse_keeps_port() {
        let parsed = ParsedUrl::parse("http://example.com:8080/a").unwrap();
        assert_eq!(parsed.origin, "http://example.com:8080");
        assert_eq!(parsed.host(), "example.com:8080");
    }

    #[test]
    fn test_malformed_input_is_none() {
        assert!(ParsedUrl::parse("not a url").is_none());
        assert!(ParsedUrl::parse("/relative/path").is_none());
        assert!(ParsedUrl::parse("").is_none());
        assert!(ParsedUrl::parse("mailto:someone@example.com").is_none());
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com/x"));
        assert!(!is_valid_url("://nope"));
    }
}
