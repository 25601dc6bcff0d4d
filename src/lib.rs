//! URL Categorization & Filtering Library
//!
//! A library backend for guided web scraping: point at a site, have its
//! discovered URLs grouped into semantic categories, select the categories
//! worth scraping, and filter the URL set down to the scrape targets.
//!
//! # Design Philosophy
//!
//! **"Pure core, injected edges"**
//!
//! - The matcher and filter engine are synchronous pure functions: no I/O,
//!   no shared state, deterministic for identical inputs
//! - Everything network- or model-shaped (URL discovery, LLM
//!   classification, regex generation) enters through traits
//! - Bad input degrades, never aborts: an uncompilable generated regex or
//!   an unparseable URL costs exactly the matches it would have produced
//!
//! # Usage
//!
//! ```rust,ignore
//! use urlsift::{filter_by_patterns, Analyzer};
//! use urlsift::testing::{MockCategorizer, MockMapper, MockPatternGenerator};
//!
//! let analyzer = Analyzer::new(mapper, categorizer, generator);
//!
//! // Discover and classify a site
//! let site = analyzer.analyze_site("https://example-estates.com").await?;
//!
//! // Generate patterns for the user's selection and filter
//! let selected = ["DATA_PAGES"];
//! let patterns = analyzer.generate_patterns(&site.analysis, &selected).await?;
//! let result = filter_by_patterns(&site.mapping.links, &selected, &patterns);
//! ```
//!
//! # Modules
//!
//! - [`matcher`] - single URL vs. single category decisions
//! - [`filter`] - the filter engine producing [`FilterResult`]
//! - [`urls`] - tolerant URL parsing
//! - [`tree`] - URL grouping by host and path segment
//! - [`types`] - lifecycle data shapes
//! - [`traits`] - collaborator seams (discovery, LLM)
//! - [`pipeline`] - orchestration around the seams
//! - [`testing`] - mock implementations for testing

pub mod error;
pub mod filter;
pub mod matcher;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod tree;
pub mod types;
pub mod urls;

// Re-export core types at crate root
pub use error::{AnalysisError, Result};
pub use traits::{Categorizer, PatternGenerator, UrlMapper};
pub use types::{
    category::{CategoryPatterns, UrlCategory, UrlPattern, UrlTypeAnalysis},
    filter::{CategoryMatch, FilterResult, FilterStats, MatchResult, MatchRule},
    mapping::UrlMapping,
    schema::{property_fields, DataField, SchemaConfig},
    test_run::{select_test_urls, ScrapeResult, TestRunSummary},
};

// Re-export the core engine
pub use filter::{filter_by_categories, filter_by_patterns};
pub use matcher::{
    compile_pattern, match_by_examples, match_by_indicators, match_by_path, match_by_regex,
    match_category, match_pattern, match_rule, CategoryRule,
};

// Re-export pipeline components
pub use pipeline::{
    batches, merge_analysis, parse_categories_response, parse_patterns_response, sample_evenly,
    Analyzer, AnalyzerConfig, SiteAnalysis,
};

// Re-export URL helpers
pub use tree::{UrlTree, UrlTreeNode};
pub use urls::{is_valid_url, ParsedUrl};
