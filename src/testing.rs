//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the urlsift library
//! without making real AI or network calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::{AnalysisError, Result};
use crate::traits::{Categorizer, PatternGenerator, UrlMapper};
use crate::types::mapping::UrlMapping;

/// A mock URL mapper returning predefined link sets.
#[derive(Default)]
pub struct MockMapper {
    /// Predefined mappings by base URL
    mappings: Arc<RwLock<HashMap<String, UrlMapping>>>,

    /// Base URLs that should fail
    failures: Arc<RwLock<HashMap<String, String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockMapper {
    /// Create a mock mapper with no predefined sites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Predefine the links discovered for a base URL.
    pub fn with_links(
        self,
        base_url: impl Into<String>,
        links: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let base_url = base_url.into();
        let mapping = UrlMapping::new(base_url.clone(), links);
        self.mappings.write().unwrap().insert(base_url, mapping);
        self
    }

    /// Make discovery fail for a base URL.
    pub fn with_failure(self, base_url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(base_url.into(), reason.into());
        self
    }

    /// Base URLs this mock was asked to map.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl UrlMapper for MockMapper {
    async fn map_urls(&self, base_url: &str) -> Result<UrlMapping> {
        self.calls.write().unwrap().push(base_url.to_string());

        if let Some(reason) = self.failures.read().unwrap().get(base_url) {
            return Err(AnalysisError::Mapper(reason.clone().into()));
        }

        Ok(self
            .mappings
            .read()
            .unwrap()
            .get(base_url)
            .cloned()
            .unwrap_or_else(|| UrlMapping::empty(base_url)))
    }
}

/// A mock categorizer returning scripted responses, one per call.
///
/// Responses are raw strings so tests can exercise both well-formed and
/// malformed model output. When the script runs out, the last response
/// repeats.
#[derive(Default)]
pub struct MockCategorizer {
    responses: Arc<RwLock<Vec<MockResponse>>>,

    /// Batches this mock was asked to categorize
    calls: Arc<RwLock<Vec<Vec<String>>>>,

    cursor: Arc<RwLock<usize>>,
}

#[derive(Clone)]
enum MockResponse {
    Ok(String),
    Err(String),
}

impl MockCategorizer {
    /// Create a mock with no scripted responses (every call fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw response to the script.
    pub fn with_response(self, json: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push(MockResponse::Ok(json.into()));
        self
    }

    /// Append a failure to the script.
    pub fn with_error(self, reason: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push(MockResponse::Err(reason.into()));
        self
    }

    /// Batches this mock was asked to categorize.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().unwrap().clone()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let responses = self.responses.read().unwrap();
        if responses.is_empty() {
            return None;
        }
        let mut cursor = self.cursor.write().unwrap();
        let response = responses[(*cursor).min(responses.len() - 1)].clone();
        *cursor += 1;
        Some(response)
    }
}

#[async_trait]
impl Categorizer for MockCategorizer {
    async fn categorize(&self, urls: &[String]) -> Result<String> {
        self.calls.write().unwrap().push(urls.to_vec());

        match self.next_response() {
            Some(MockResponse::Ok(json)) => Ok(json),
            Some(MockResponse::Err(reason)) => Err(AnalysisError::AI(reason.into())),
            None => Err(AnalysisError::AI("no scripted response".into())),
        }
    }
}

/// A mock pattern generator returning a fixed raw response.
#[derive(Default)]
pub struct MockPatternGenerator {
    response: Arc<RwLock<Option<MockResponse>>>,

    /// Example maps this mock was asked to generalize
    calls: Arc<RwLock<Vec<IndexMap<String, Vec<String>>>>>,
}

impl MockPatternGenerator {
    /// Create a mock with no response (every call fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw response returned for every call.
    pub fn with_response(self, json: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(MockResponse::Ok(json.into()));
        self
    }

    /// Make every call fail.
    pub fn with_error(self, reason: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(MockResponse::Err(reason.into()));
        self
    }

    /// Example maps this mock was asked to generalize.
    pub fn calls(&self) -> Vec<IndexMap<String, Vec<String>>> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PatternGenerator for MockPatternGenerator {
    async fn generate_patterns(
        &self,
        examples: &IndexMap<String, Vec<String>>,
    ) -> Result<String> {
        self.calls.write().unwrap().push(examples.clone());

        match self.response.read().unwrap().clone() {
            Some(MockResponse::Ok(json)) => Ok(json),
            Some(MockResponse::Err(reason)) => Err(AnalysisError::AI(reason.into())),
            None => Err(AnalysisError::AI("no scripted response".into())),
        }
    }
}
