//! Test-run types - per-URL outcomes of a small trial extraction batch.
//!
//! Fetching and LLM extraction happen outside this crate; the caller feeds
//! the per-URL outcomes back in and this module does the bookkeeping.

use serde::{Deserialize, Serialize};

/// Outcome of scraping one URL during a test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub url: String,

    /// Extracted row, `None` when the URL failed
    pub data: Option<serde_json::Value>,

    /// Failure reason, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock processing time in milliseconds
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
}

impl ScrapeResult {
    /// A successful extraction.
    pub fn ok(url: impl Into<String>, data: serde_json::Value, processing_time_ms: u64) -> Self {
        Self {
            url: url.into(),
            data: Some(data),
            error: None,
            processing_time_ms,
        }
    }

    /// A failed extraction.
    pub fn failed(
        url: impl Into<String>,
        error: impl Into<String>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            url: url.into(),
            data: None,
            error: Some(error.into()),
            processing_time_ms,
        }
    }

    /// Whether this URL produced data.
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

/// Aggregate summary of a test run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunSummary {
    pub total: usize,
    pub successful: usize,
    pub errors: usize,

    #[serde(rename = "averageProcessingTime")]
    pub average_processing_time_ms: f64,
}

impl TestRunSummary {
    /// Summarize a batch of results.
    pub fn from_results(results: &[ScrapeResult]) -> Self {
        let successful = results.iter().filter(|r| r.is_success()).count();
        let average_processing_time_ms = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.processing_time_ms).sum::<u64>() as f64
                / results.len() as f64
        };

        Self {
            total: results.len(),
            successful,
            errors: results.len() - successful,
            average_processing_time_ms,
        }
    }
}

/// Pick the URLs for a test run: the first `limit` distinct entries of the
/// filtered set, preserving order.
pub fn select_test_urls(filtered_urls: &[String], limit: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    filtered_urls
        .iter()
        .filter(|url| seen.insert(url.as_str()))
        .take(limit)
        .cloned()
        .collect()
}
