//! CoriTool Source Layer
//!
//! Implementations of the `SanctionsSource` and `SearchSource` traits from
//! `coritool-domain`.
//!
//! # Sources
//!
//! - [`OpenSanctionsClient`]: OpenSanctions `search/default` API
//! - [`CustomSearchClient`]: Google Custom Search JSON API, one engine per category
//! - [`MockSanctions`] / [`MockSearch`]: deterministic doubles for testing
//!
//! Clients are blocking and make exactly one attempt per call. They report
//! failures as [`SourceError`]; the triage layer decides what to substitute.
//!
//! # Examples
//!
//! ```
//! use coritool_domain::traits::SearchSource;
//! use coritool_domain::{SearchCategory, SearchItem};
//! use coritool_sources::MockSearch;
//!
//! let mut search = MockSearch::new();
//! search.add_items(SearchCategory::Business, vec![SearchItem::new("Власник", "")]);
//!
//! let items = search.search("Acme", SearchCategory::Business, 10).unwrap();
//! assert_eq!(items.len(), 1);
//! assert_eq!(search.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod custom_search;
pub mod mock;
pub mod opensanctions;

use thiserror::Error;

pub use config::{Credentials, Endpoints, SearchEngines, SourceConfig};
pub use custom_search::CustomSearchClient;
pub use mock::{MockSanctions, MockSearch};
pub use opensanctions::OpenSanctionsClient;

/// Errors that can occur while talking to an external source
#[derive(Error, Debug)]
pub enum SourceError {
    /// Required credentials are absent from the environment
    #[error("Missing API keys. Set {} as environment variables.", .0.join(" and "))]
    MissingCredentials(Vec<String>),

    /// Network or transport failure (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Http(String),

    /// Non-success HTTP status
    #[error("HTTP {0}: {1}")]
    Status(u16, String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),

    /// Generic error (used by test doubles)
    #[error("Source error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => SourceError::Status(status.as_u16(), e.to_string()),
                None => SourceError::Http(e.to_string()),
            }
        } else if e.is_builder() {
            SourceError::Client(e.to_string())
        } else {
            SourceError::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Decode(e.to_string())
    }
}

/// Read a non-success response into a [`SourceError::Status`]
pub(crate) fn status_error(response: reqwest::blocking::Response) -> SourceError {
    let status = response.status();
    let body = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    SourceError::Status(status.as_u16(), body)
}
