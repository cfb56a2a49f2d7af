//! OpenSanctions Client
//!
//! Queries the OpenSanctions `search/default` endpoint for a name under a
//! schema and decodes the hits.
//!
//! # Features
//!
//! - Blocking HTTP with a fixed per-request timeout (20 seconds by default)
//! - `Authorization: ApiKey <key>` header
//! - Single attempt, no retries
//!
//! # Examples
//!
//! ```no_run
//! use coritool_domain::Schema;
//! use coritool_sources::OpenSanctionsClient;
//!
//! let client = OpenSanctionsClient::new("https://api.opensanctions.org", "api-key").unwrap();
//! let hits = client.fetch("John Smith", Schema::Person).unwrap();
//! println!("{} hits", hits.len());
//! ```

use crate::config::{SourceConfig, DEFAULT_SANCTIONS_TIMEOUT_SECS};
use crate::{status_error, SourceError};
use coritool_domain::sanctions::UNKNOWN_CAPTION;
use coritool_domain::traits::{SanctionsSource, SANCTIONS_RESULT_LIMIT};
use coritool_domain::{SanctionsHit, Schema};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// OpenSanctions API client
pub struct OpenSanctionsClient {
    base_url: String,
    api_key: String,
    client: Client,
}

/// Response from the search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawHit>,
}

/// A single result entity
#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    datasets: Vec<String>,
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    topics: Vec<String>,
}

impl From<RawHit> for SanctionsHit {
    fn from(raw: RawHit) -> Self {
        SanctionsHit::new(
            raw.caption.unwrap_or_else(|| UNKNOWN_CAPTION.to_string()),
            raw.datasets,
            raw.properties.topics,
        )
    }
}

impl OpenSanctionsClient {
    /// Create a client with the default timeout
    ///
    /// # Parameters
    ///
    /// - `base_url`: API base (e.g. "https://api.opensanctions.org")
    /// - `api_key`: OpenSanctions API key
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, SourceError> {
        Self::with_timeout(
            base_url,
            api_key,
            Duration::from_secs(DEFAULT_SANCTIONS_TIMEOUT_SECS),
        )
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a client from the loaded source configuration
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::with_timeout(
            config.endpoints.sanctions_url.clone(),
            config.credentials.opensanctions_api_key.clone(),
            config.endpoints.sanctions_timeout(),
        )
    }

    /// Build the request URL for a name and schema
    pub fn search_url(&self, name: &str, schema: Schema) -> String {
        format!(
            "{}/search/default?q={}&schema={}&limit={}",
            self.base_url,
            urlencoding::encode(name),
            schema.as_str(),
            SANCTIONS_RESULT_LIMIT
        )
    }

    /// Fetch sanctions hits for a name
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request fails or times out
    /// - The API answers with a non-success status
    /// - The body is not the expected JSON
    pub fn fetch(&self, name: &str, schema: Schema) -> Result<Vec<SanctionsHit>, SourceError> {
        let url = self.search_url(name, schema);
        debug!(name, schema = schema.as_str(), "Querying OpenSanctions");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("ApiKey {}", self.api_key))
            .send()?;

        if !response.status().is_success() {
            return Err(status_error(response));
        }

        let body: SearchResponse = response.json()?;
        debug!(name, hits = body.results.len(), "OpenSanctions answered");

        Ok(body.results.into_iter().map(SanctionsHit::from).collect())
    }
}

impl SanctionsSource for OpenSanctionsClient {
    type Error = SourceError;

    fn search_sanctions(
        &self,
        name: &str,
        schema: Schema,
    ) -> Result<Vec<SanctionsHit>, Self::Error> {
        self.fetch(name, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_name() {
        let client = OpenSanctionsClient::new("https://api.opensanctions.org/", "key").unwrap();
        assert_eq!(
            client.search_url("John Smith & Co", Schema::Company),
            "https://api.opensanctions.org/search/default?q=John%20Smith%20%26%20Co&schema=Company&limit=10"
        );
    }

    #[test]
    fn test_search_url_encodes_cyrillic() {
        let client = OpenSanctionsClient::new("http://localhost", "key").unwrap();
        let url = client.search_url("Іван", Schema::Person);
        assert!(url.contains("q=%D0%86%D0%B2%D0%B0%D0%BD"));
    }

    #[test]
    fn test_decode_hit_defaults() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"results": [{"datasets": ["ua_nsdc_sanctions"]}, {"caption": "B", "properties": {"topics": ["sanction"]}}]}"#,
        )
        .unwrap();
        let hits: Vec<SanctionsHit> = body.results.into_iter().map(SanctionsHit::from).collect();
        assert_eq!(hits[0].caption, "Unknown");
        assert!(hits[0].topics.is_empty());
        assert_eq!(hits[1].topics, vec!["sanction".to_string()]);
        assert!(hits[1].datasets.is_empty());
    }

    #[test]
    fn test_decode_missing_results() {
        let body: SearchResponse = serde_json::from_str(r#"{"total": {"value": 0}}"#).unwrap();
        assert!(body.results.is_empty());
    }
}
