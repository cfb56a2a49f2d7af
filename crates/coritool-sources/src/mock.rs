//! Deterministic test doubles for the source traits
//!
//! These sources return pre-configured data without making any network
//! calls, and count every call so tests can assert on traffic.

use crate::SourceError;
use coritool_domain::traits::{SanctionsSource, SearchSource};
use coritool_domain::{SanctionsHit, Schema, SearchCategory, SearchItem};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock sanctions source
///
/// Returns hits registered per name, or the default hits for any other name.
///
/// # Examples
///
/// ```
/// use coritool_domain::traits::SanctionsSource;
/// use coritool_domain::{SanctionsHit, Schema};
/// use coritool_sources::MockSanctions;
///
/// let mut sanctions = MockSanctions::new();
/// let hit = SanctionsHit::new("John Smith", vec!["ua_nsdc_sanctions".into()], vec![]);
/// sanctions.add_hits("John Smith", vec![hit]);
///
/// assert_eq!(sanctions.search_sanctions("John Smith", Schema::Person).unwrap().len(), 1);
/// assert!(sanctions.search_sanctions("Smith John", Schema::Person).unwrap().is_empty());
/// assert_eq!(sanctions.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSanctions {
    default_hits: Vec<SanctionsHit>,
    hits: Arc<Mutex<HashMap<String, Vec<SanctionsHit>>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<(String, Schema)>>>,
}

impl MockSanctions {
    /// Create a mock that returns no hits for any name
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns the same hits for every name
    pub fn with_default_hits(hits: Vec<SanctionsHit>) -> Self {
        Self {
            default_hits: hits,
            ..Self::default()
        }
    }

    /// Register hits for a specific name
    pub fn add_hits(&mut self, name: impl Into<String>, hits: Vec<SanctionsHit>) {
        self.hits.lock().unwrap().insert(name.into(), hits);
    }

    /// Make lookups for a specific name fail
    pub fn add_failure(&mut self, name: impl Into<String>) {
        self.failures.lock().unwrap().insert(name.into());
    }

    /// Get the number of lookups performed
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get the names and schemas looked up, in call order
    pub fn calls(&self) -> Vec<(String, Schema)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SanctionsSource for MockSanctions {
    type Error = SourceError;

    fn search_sanctions(
        &self,
        name: &str,
        schema: Schema,
    ) -> Result<Vec<SanctionsHit>, Self::Error> {
        self.calls.lock().unwrap().push((name.to_string(), schema));

        if self.failures.lock().unwrap().contains(name) {
            return Err(SourceError::Other(format!("Mock failure for {}", name)));
        }

        Ok(self
            .hits
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| self.default_hits.clone()))
    }
}

/// A recorded search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    /// Query text
    pub query: String,
    /// Category searched
    pub category: SearchCategory,
    /// Requested result limit
    pub limit: usize,
}

/// Mock search source
///
/// Items are registered per category, optionally narrowed to one query.
/// Query-specific items take precedence over category-wide items.
#[derive(Debug, Clone, Default)]
pub struct MockSearch {
    by_category: Arc<Mutex<HashMap<SearchCategory, Vec<SearchItem>>>>,
    by_query: Arc<Mutex<HashMap<(SearchCategory, String), Vec<SearchItem>>>>,
    failing: Arc<Mutex<HashSet<SearchCategory>>>,
    calls: Arc<Mutex<Vec<SearchCall>>>,
}

impl MockSearch {
    /// Create a mock that returns no items for any query
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `items` for every query in `category`
    pub fn add_items(&mut self, category: SearchCategory, items: Vec<SearchItem>) {
        self.by_category.lock().unwrap().insert(category, items);
    }

    /// Return `items` for one exact query in `category`
    pub fn add_query_items(
        &mut self,
        category: SearchCategory,
        query: impl Into<String>,
        items: Vec<SearchItem>,
    ) {
        self.by_query
            .lock()
            .unwrap()
            .insert((category, query.into()), items);
    }

    /// Make every query in `category` fail
    pub fn add_failure(&mut self, category: SearchCategory) {
        self.failing.lock().unwrap().insert(category);
    }

    /// Get the number of searches performed
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get the number of searches performed in one category
    pub fn category_call_count(&self, category: SearchCategory) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.category == category)
            .count()
    }

    /// Get every recorded call, in order
    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchSource for MockSearch {
    type Error = SourceError;

    fn search(
        &self,
        query: &str,
        category: SearchCategory,
        limit: usize,
    ) -> Result<Vec<SearchItem>, Self::Error> {
        self.calls.lock().unwrap().push(SearchCall {
            query: query.to_string(),
            category,
            limit,
        });

        if self.failing.lock().unwrap().contains(&category) {
            return Err(SourceError::Other(format!("Mock failure for {}", category)));
        }

        if let Some(items) = self
            .by_query
            .lock()
            .unwrap()
            .get(&(category, query.to_string()))
        {
            return Ok(items.clone());
        }

        Ok(self
            .by_category
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }
}
