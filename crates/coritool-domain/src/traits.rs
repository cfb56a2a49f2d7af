//! Trait definitions for external lookups
//!
//! These traits define the boundaries between the triage logic and the
//! network. Implementations live in `coritool-sources`.
//!
//! Both traits report failures as `Err`; substituting the degraded default
//! (zero hits, no results) is the caller's job, so the policy stays visible.

use crate::entity::Schema;
use crate::sanctions::SanctionsHit;
use crate::search::{SearchCategory, SearchItem};

/// Fixed result limit for sanctions lookups
pub const SANCTIONS_RESULT_LIMIT: usize = 10;

/// Result limit used for investigative and business searches
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Trait for sanctions-screening lookups
///
/// Implemented by the infrastructure layer (coritool-sources)
pub trait SanctionsSource {
    /// Error type for lookup operations
    type Error;

    /// Search the sanctions index for a name under a schema
    fn search_sanctions(
        &self,
        name: &str,
        schema: Schema,
    ) -> Result<Vec<SanctionsHit>, Self::Error>;
}

/// Trait for curated web search
///
/// Implemented by the infrastructure layer (coritool-sources)
pub trait SearchSource {
    /// Error type for search operations
    type Error;

    /// Run a query against the engine configured for `category`
    ///
    /// A category with no configured engine returns `Ok` with no results and
    /// must not touch the network.
    fn search(
        &self,
        query: &str,
        category: SearchCategory,
        limit: usize,
    ) -> Result<Vec<SearchItem>, Self::Error>;
}

impl<T: SanctionsSource + ?Sized> SanctionsSource for &T {
    type Error = T::Error;

    fn search_sanctions(
        &self,
        name: &str,
        schema: Schema,
    ) -> Result<Vec<SanctionsHit>, Self::Error> {
        (**self).search_sanctions(name, schema)
    }
}

impl<T: SearchSource + ?Sized> SearchSource for &T {
    type Error = T::Error;

    fn search(
        &self,
        query: &str,
        category: SearchCategory,
        limit: usize,
    ) -> Result<Vec<SearchItem>, Self::Error> {
        (**self).search(query, category, limit)
    }
}
