//! UrlMapper trait - the URL discovery seam.
//!
//! Discovery is an external scraping service (site mapping API, sitemap
//! reader, crawler); this crate only consumes its output shape.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::mapping::UrlMapping;

/// Discovers all URLs reachable from a base URL.
///
/// Implementations wrap a scraping/mapping service. Failure to reach the
/// service surfaces as [`crate::error::AnalysisError::Mapper`]; an empty
/// site is not an error and returns an empty mapping.
#[async_trait]
pub trait UrlMapper: Send + Sync {
    /// Map a site comprehensively, unfiltered.
    async fn map_urls(&self, base_url: &str) -> Result<UrlMapping>;
}
