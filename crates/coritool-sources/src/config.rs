//! Credential, engine, and endpoint configuration
//!
//! Credentials and engine identifiers come from the process environment.
//! Endpoints and timeouts have defaults and may be overridden from the CLI
//! configuration file.

use crate::SourceError;
use coritool_domain::SearchCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the OpenSanctions API key
pub const OPENSANCTIONS_API_KEY_VAR: &str = "OPENSANCTIONS_API_KEY";

/// Environment variable holding the Google API key
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Default OpenSanctions API base URL
pub const DEFAULT_SANCTIONS_URL: &str = "https://api.opensanctions.org";

/// Default Custom Search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Default timeout for sanctions requests (20 seconds)
pub const DEFAULT_SANCTIONS_TIMEOUT_SECS: u64 = 20;

/// Default timeout for search requests (15 seconds)
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 15;

/// Environment variable holding the engine id for a category
pub fn engine_env_var(category: SearchCategory) -> &'static str {
    match category {
        SearchCategory::Investigative => "CSE_INVESTIGATIVE",
        SearchCategory::Media => "CSE_MEDIA",
        SearchCategory::Official => "CSE_OFFICIAL",
        SearchCategory::International => "CSE_INTERNATIONAL",
        SearchCategory::Regional => "CSE_REGIONAL",
        SearchCategory::Business => "CSE_BUSINESS",
    }
}

/// API keys for the external sources
///
/// `Debug` redacts both keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OpenSanctions API key
    pub opensanctions_api_key: String,

    /// Google API key
    pub google_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("opensanctions_api_key", &"<redacted>")
            .field("google_api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Load both keys through a lookup function
    ///
    /// Empty values count as missing. The error lists every missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SourceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opensanctions = non_empty(lookup(OPENSANCTIONS_API_KEY_VAR));
        let google = non_empty(lookup(GOOGLE_API_KEY_VAR));

        match (opensanctions, google) {
            (Some(opensanctions_api_key), Some(google_api_key)) => Ok(Self {
                opensanctions_api_key,
                google_api_key,
            }),
            (opensanctions, google) => {
                let mut missing = Vec::new();
                if opensanctions.is_none() {
                    missing.push(OPENSANCTIONS_API_KEY_VAR.to_string());
                }
                if google.is_none() {
                    missing.push(GOOGLE_API_KEY_VAR.to_string());
                }
                Err(SourceError::MissingCredentials(missing))
            }
        }
    }
}

/// Custom search engine identifiers, per category
///
/// Categories without an identifier are skipped by the search client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEngines {
    engines: BTreeMap<SearchCategory, String>,
}

impl SearchEngines {
    /// Create an empty engine map
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every category's engine id through a lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let engines = SearchCategory::ALL
            .into_iter()
            .filter_map(|category| {
                non_empty(lookup(engine_env_var(category))).map(|cx| (category, cx))
            })
            .collect();
        Self { engines }
    }

    /// Set the engine id for a category
    pub fn with_engine(mut self, category: SearchCategory, cx: impl Into<String>) -> Self {
        self.engines.insert(category, cx.into());
        self
    }

    /// Get the engine id for a category
    pub fn get(&self, category: SearchCategory) -> Option<&str> {
        self.engines.get(&category).map(String::as_str)
    }

    /// Categories that have an engine configured
    pub fn configured(&self) -> impl Iterator<Item = SearchCategory> + '_ {
        self.engines.keys().copied()
    }
}

/// API endpoints and per-source timeouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// OpenSanctions API base URL (without the `/search/...` path)
    #[serde(default = "default_sanctions_url")]
    pub sanctions_url: String,

    /// Custom Search endpoint URL
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Sanctions request timeout in seconds
    #[serde(default = "default_sanctions_timeout_secs")]
    pub sanctions_timeout_secs: u64,

    /// Search request timeout in seconds
    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,
}

impl Endpoints {
    /// Get the sanctions timeout as a Duration
    pub fn sanctions_timeout(&self) -> Duration {
        Duration::from_secs(self.sanctions_timeout_secs)
    }

    /// Get the search timeout as a Duration
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Validate the endpoint settings
    pub fn validate(&self) -> Result<(), String> {
        if self.sanctions_url.is_empty() {
            return Err("sanctions_url must not be empty".to_string());
        }
        if self.search_url.is_empty() {
            return Err("search_url must not be empty".to_string());
        }
        if self.sanctions_timeout_secs == 0 {
            return Err("sanctions_timeout_secs must be greater than 0".to_string());
        }
        if self.search_timeout_secs == 0 {
            return Err("search_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sanctions_url: default_sanctions_url(),
            search_url: default_search_url(),
            sanctions_timeout_secs: DEFAULT_SANCTIONS_TIMEOUT_SECS,
            search_timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}

fn default_sanctions_url() -> String {
    DEFAULT_SANCTIONS_URL.to_string()
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_sanctions_timeout_secs() -> u64 {
    DEFAULT_SANCTIONS_TIMEOUT_SECS
}

fn default_search_timeout_secs() -> u64 {
    DEFAULT_SEARCH_TIMEOUT_SECS
}

/// Everything the source clients need, built once at process entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// API keys
    pub credentials: Credentials,

    /// Search engine ids per category
    pub engines: SearchEngines,

    /// Endpoints and timeouts
    pub endpoints: Endpoints,
}

impl SourceConfig {
    /// Load credentials and engine ids from the process environment
    ///
    /// Fails if either required API key is absent.
    pub fn from_env(endpoints: Endpoints) -> Result<Self, SourceError> {
        Self::from_lookup(|name| std::env::var(name).ok(), endpoints)
    }

    /// Load credentials and engine ids through a lookup function
    pub fn from_lookup<F>(lookup: F, endpoints: Endpoints) -> Result<Self, SourceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup)?;
        let engines = SearchEngines::from_lookup(&lookup);
        Ok(Self {
            credentials,
            engines,
            endpoints,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
