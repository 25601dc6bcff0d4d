//! AI traits for LLM operations.
//!
//! Two inference steps feed the wizard:
//! - [`Categorizer`] groups discovered URLs into semantic categories.
//! - [`PatternGenerator`] generalizes a selected category's examples into
//!   one regex.
//!
//! Both return the model's raw response text; the pipeline parses it
//! tolerantly ([`crate::pipeline::parse`]) so prompt and transport details
//! stay inside the implementation and malformed output degrades instead of
//! failing the run.

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::Result;

/// Classifies URLs into semantic categories.
///
/// Implementations wrap a specific LLM provider and its prompting. The
/// expected response is JSON shaped like
/// `{"url_categories": {"NAME": {"type": "...", "examples": [...]}}}`.
#[async_trait]
pub trait Categorizer: Send + Sync {
    /// Categorize a batch of URLs, returning the raw model response.
    async fn categorize(&self, urls: &[String]) -> Result<String>;
}

/// Generates one regex per category from that category's example URLs.
///
/// The expected response is JSON shaped like
/// `{"NAME": {"regex": "..."}}`; entries may cover only a subset of the
/// requested categories.
#[async_trait]
pub trait PatternGenerator: Send + Sync {
    /// Generate patterns for the given category examples, returning the raw
    /// model response.
    async fn generate_patterns(&self, examples: &IndexMap<String, Vec<String>>)
        -> Result<String>;
}
