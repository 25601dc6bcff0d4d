//! URL mapping - the discovery collaborator's output shape.

use serde::{Deserialize, Serialize};

/// All URLs discovered for a site, unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Discovered URLs in the order the mapper reported them
    #[serde(default)]
    pub links: Vec<String>,

    /// Number of discovered URLs (`links.len()`)
    pub count: usize,

    /// The site URL the discovery started from
    pub base_url: String,
}

impl UrlMapping {
    /// Create a mapping from discovered links.
    pub fn new(
        base_url: impl Into<String>,
        links: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let links: Vec<String> = links.into_iter().map(|l| l.into()).collect();
        Self {
            count: links.len(),
            links,
            base_url: base_url.into(),
        }
    }

    /// Create an empty mapping for a site (discovery found nothing).
    pub fn empty(base_url: impl Into<String>) -> Self {
        Self {
            links: Vec::new(),
            count: 0,
            base_url: base_url.into(),
        }
    }

    /// Whether discovery produced any URLs.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
