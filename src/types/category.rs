//! Category types - semantic URL groupings and their matching rules.
//!
//! A category goes through two representations over its lifecycle:
//!
//! 1. A *descriptive category* ([`UrlCategory`]) produced by the external
//!    classifier: a human-readable description plus a short list of example
//!    URLs drawn from the discovered set.
//! 2. A *pattern category* ([`UrlPattern`]) produced by the external pattern
//!    generator, one per selected descriptive category: a single regex that
//!    generalizes the examples.
//!
//! Both are plain value data with no back-references; they are created fresh
//! from collaborator responses on each wizard pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A descriptive URL category: what kind of pages these are, with examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCategory {
    /// Brief description of what kind of data these pages contain
    #[serde(rename = "type")]
    pub kind: String,

    /// Example URLs from the discovered set (typically at most 5)
    #[serde(default)]
    pub examples: Vec<String>,
}

impl UrlCategory {
    /// Create a new category with a description and no examples.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            examples: Vec::new(),
        }
    }

    /// Add example URLs.
    pub fn with_examples(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.examples.extend(urls.into_iter().map(|u| u.into()));
        self
    }
}

/// The classifier's full output: category name to descriptive category.
///
/// Iteration order is insertion order so repeated runs over the same
/// response stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTypeAnalysis {
    #[serde(default)]
    pub url_categories: IndexMap<String, UrlCategory>,
}

impl UrlTypeAnalysis {
    /// Create an empty analysis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category under a name.
    pub fn with_category(mut self, name: impl Into<String>, category: UrlCategory) -> Self {
        self.url_categories.insert(name.into(), category);
        self
    }

    /// Names of all categories, in insertion order.
    pub fn category_names(&self) -> Vec<String> {
        self.url_categories.keys().cloned().collect()
    }

    /// Example URLs for a category, if it exists.
    pub fn examples_for(&self, name: &str) -> Option<&[String]> {
        self.url_categories.get(name).map(|c| c.examples.as_slice())
    }
}

/// A pattern category: a single generated regex for one category.
///
/// The regex source comes from an untrusted inference step; it is compiled
/// defensively at the point of use, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPattern {
    pub regex: String,
}

impl UrlPattern {
    /// Create a pattern from a regex source string.
    pub fn new(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
        }
    }
}

/// Generated patterns keyed by category name.
///
/// May be a strict subset of the selected categories (generation can fail
/// for individual categories); the filter engine tolerates missing entries.
pub type CategoryPatterns = IndexMap<String, UrlPattern>;
