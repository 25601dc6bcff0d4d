//! URL tree - group discovered URLs by host and path segment.
//!
//! Backs the wizard's link-overview stage: a counted tree of where the
//! discovered URLs live on the site. Pure data structure; rendering is the
//! caller's concern.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::urls::ParsedUrl;

/// One node in the URL tree: a host or a path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTreeNode {
    /// URLs that terminate exactly at this node
    #[serde(default)]
    pub urls: Vec<String>,

    /// Number of URLs at or below this node
    pub count: usize,

    /// Child nodes keyed by segment, in first-seen order
    #[serde(default)]
    pub children: IndexMap<String, UrlTreeNode>,
}

/// A tree of URLs grouped by host, then path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTree {
    /// Root nodes keyed by host
    #[serde(default)]
    pub hosts: IndexMap<String, UrlTreeNode>,

    /// Input URLs that did not parse and were left out
    pub skipped: usize,
}

impl UrlTree {
    /// Build a tree from a URL set. Unparseable URLs are counted in
    /// `skipped`, never fatal.
    pub fn build<S: AsRef<str>>(urls: &[S]) -> Self {
        let mut tree = Self::default();

        for raw in urls {
            let raw = raw.as_ref();
            let Some(parsed) = ParsedUrl::parse(raw) else {
                tracing::debug!(url = raw, "skipping unparseable URL in tree build");
                tree.skipped += 1;
                continue;
            };

            let mut node = tree.hosts.entry(parsed.host().to_string()).or_default();
            node.count += 1;

            for segment in &parsed.segments {
                node = node.children.entry(segment.clone()).or_default();
                node.count += 1;
            }
            node.urls.push(raw.to_string());
        }

        tree
    }

    /// Total URLs placed in the tree.
    pub fn total(&self) -> usize {
        self.hosts.values().map(|n| n.count).sum()
    }

    /// Node for a host, if any URL had it.
    pub fn host(&self, host: &str) -> Option<&UrlTreeNode> {
        self.hosts.get(host)
    }
}
