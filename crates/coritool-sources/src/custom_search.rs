//! Google Custom Search Client
//!
//! Runs queries against the Custom Search JSON API, routing each
//! [`SearchCategory`] to its own programmable search engine (`cx`).

use crate::config::{SearchEngines, SourceConfig, DEFAULT_SEARCH_TIMEOUT_SECS};
use crate::{status_error, SourceError};
use coritool_domain::traits::SearchSource;
use coritool_domain::{SearchCategory, SearchItem};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Custom Search JSON API client
pub struct CustomSearchClient {
    url: String,
    api_key: String,
    engines: SearchEngines,
    client: Client,
}

/// Response from the Custom Search API
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: Option<String>,
}

impl From<RawItem> for SearchItem {
    fn from(raw: RawItem) -> Self {
        SearchItem {
            title: raw.title,
            snippet: raw.snippet,
            link: raw.link,
        }
    }
}

impl CustomSearchClient {
    /// Create a client with the default timeout
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        engines: SearchEngines,
    ) -> Result<Self, SourceError> {
        Self::with_timeout(
            url,
            api_key,
            engines,
            Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        )
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        url: impl Into<String>,
        api_key: impl Into<String>,
        engines: SearchEngines,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            api_key: api_key.into(),
            engines,
            client,
        })
    }

    /// Create a client from the loaded source configuration
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::with_timeout(
            config.endpoints.search_url.clone(),
            config.credentials.google_api_key.clone(),
            config.engines.clone(),
            config.endpoints.search_timeout(),
        )
    }

    /// Run a query against the engine for `category`
    ///
    /// Returns an empty list without any request when the category has no
    /// engine configured.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or an
    /// undecodable body.
    pub fn query(
        &self,
        query: &str,
        category: SearchCategory,
        limit: usize,
    ) -> Result<Vec<SearchItem>, SourceError> {
        let Some(cx) = self.engines.get(category) else {
            debug!(%category, "No search engine configured, skipping");
            return Ok(Vec::new());
        };

        debug!(%category, query, limit, "Querying custom search");

        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", cx),
                ("q", query),
                ("num", limit.as_str()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(status_error(response));
        }

        let body: SearchResponse = response.json()?;
        debug!(%category, query, items = body.items.len(), "Custom search answered");

        Ok(body.items.into_iter().map(SearchItem::from).collect())
    }
}

impl SearchSource for CustomSearchClient {
    type Error = SourceError;

    fn search(
        &self,
        query: &str,
        category: SearchCategory,
        limit: usize,
    ) -> Result<Vec<SearchItem>, Self::Error> {
        self.query(query, category, limit)
    }
}
