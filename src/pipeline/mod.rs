//! Analysis pipeline - orchestrates the collaborator seams around the pure
//! core.
//!
//! The [`Analyzer`] drives the wizard's data flow: discover URLs, classify
//! them into categories, generate patterns for the user's selection, and
//! filter. Everything network- or model-shaped is injected; everything here
//! is glue plus the pure helpers in [`parse`], [`sample`], and [`merge`].

pub mod merge;
pub mod parse;
pub mod sample;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter;
use crate::traits::{Categorizer, PatternGenerator, UrlMapper};
use crate::types::category::{CategoryPatterns, UrlTypeAnalysis};
use crate::types::filter::FilterResult;
use crate::types::mapping::UrlMapping;

pub use merge::merge_analysis;
pub use parse::{parse_categories_response, parse_patterns_response};
pub use sample::{batches, sample_evenly};

/// Tuning knobs for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Cap on URLs sent through classification; larger sets are sampled
    /// evenly. Default: 2000.
    pub max_urls_for_analysis: usize,

    /// URLs per classification call. Default: 500.
    pub batch_size: usize,

    /// Examples kept per category when merging batches. Default: 5.
    pub max_examples_per_category: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_urls_for_analysis: 2000,
            batch_size: 500,
            max_examples_per_category: 5,
        }
    }
}

/// Discovery plus classification for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub mapping: UrlMapping,
    pub analysis: UrlTypeAnalysis,
}

/// Orchestrates mapper, categorizer, and pattern generator.
pub struct Analyzer<M, C, G> {
    mapper: M,
    categorizer: C,
    generator: G,
    config: AnalyzerConfig,
}

impl<M, C, G> Analyzer<M, C, G>
where
    M: UrlMapper,
    C: Categorizer,
    G: PatternGenerator,
{
    /// Create an analyzer with default configuration.
    pub fn new(mapper: M, categorizer: C, generator: G) -> Self {
        Self {
            mapper,
            categorizer,
            generator,
            config: AnalyzerConfig::default(),
        }
    }

    /// Override the configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Discover all URLs for a site.
    pub async fn discover(&self, base_url: &str) -> Result<UrlMapping> {
        let mapping = self.mapper.map_urls(base_url).await?;
        tracing::debug!(base_url, count = mapping.count, "discovered URLs");
        Ok(mapping)
    }

    /// Classify URLs into semantic categories.
    ///
    /// Oversized sets are sampled evenly, then classified in batches. A
    /// failed or unparseable batch is logged and skipped; the remaining
    /// batches still contribute, so the result may be partial but the call
    /// only fails if the caller's input was unusable.
    pub async fn analyze(&self, urls: &[String]) -> Result<UrlTypeAnalysis> {
        let sampled = sample::sample_evenly(urls, self.config.max_urls_for_analysis);
        if sampled.len() < urls.len() {
            tracing::debug!(
                total = urls.len(),
                sampled = sampled.len(),
                "sampling URLs for classification"
            );
        }

        let mut merged = UrlTypeAnalysis::new();
        for (i, batch) in sample::batches(&sampled, self.config.batch_size).iter().enumerate() {
            let response = match self.categorizer.categorize(batch).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(batch = i, error = %err, "classification batch failed, skipping");
                    continue;
                }
            };

            match parse::parse_categories_response(&response) {
                Ok(analysis) => merge::merge_analysis(
                    &mut merged,
                    analysis,
                    self.config.max_examples_per_category,
                ),
                Err(err) => {
                    tracing::warn!(batch = i, error = %err, "unparseable classification response, skipping");
                }
            }
        }

        tracing::debug!(categories = merged.url_categories.len(), "classification complete");
        Ok(merged)
    }

    /// Full discovery-plus-classification workflow for a site.
    pub async fn analyze_site(&self, base_url: &str) -> Result<SiteAnalysis> {
        let mapping = self.discover(base_url).await?;
        let analysis = self.analyze(&mapping.links).await?;
        Ok(SiteAnalysis { mapping, analysis })
    }

    /// Generate one regex per selected category from its examples.
    ///
    /// Selected names missing from the analysis (or carrying no examples)
    /// are not sent to the generator; the returned map may therefore be a
    /// strict subset of the selection, which the filter engine tolerates.
    pub async fn generate_patterns<S: AsRef<str>>(
        &self,
        analysis: &UrlTypeAnalysis,
        selected_categories: &[S],
    ) -> Result<CategoryPatterns> {
        let mut examples: IndexMap<String, Vec<String>> = IndexMap::new();
        for name in selected_categories {
            let name = name.as_ref();
            match analysis.examples_for(name) {
                Some(list) if !list.is_empty() => {
                    examples.insert(name.to_string(), list.to_vec());
                }
                _ => {
                    tracing::warn!(category = name, "no examples for selected category, skipping");
                }
            }
        }

        if examples.is_empty() {
            return Ok(CategoryPatterns::new());
        }

        let response = self.generator.generate_patterns(&examples).await?;
        let patterns = parse::parse_patterns_response(&response)?;
        tracing::debug!(
            requested = examples.len(),
            generated = patterns.len(),
            "pattern generation complete"
        );
        Ok(patterns)
    }

    /// Filter URLs by examples membership for the selected categories.
    pub fn filter_selected<S: AsRef<str>>(
        &self,
        urls: &[String],
        selected_categories: &[S],
        analysis: &UrlTypeAnalysis,
    ) -> FilterResult {
        filter::filter_by_categories(urls, selected_categories, analysis)
    }

    /// Filter URLs by generated regex patterns.
    pub fn filter_generated<S: AsRef<str>>(
        &self,
        urls: &[String],
        selected_categories: &[S],
        patterns: &CategoryPatterns,
    ) -> FilterResult {
        filter::filter_by_patterns(urls, selected_categories, patterns)
    }
}
