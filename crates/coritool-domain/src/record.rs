//! Aggregated OSINT record

use crate::search::SearchItem;
use crate::signals::BusinessFlags;

/// Evidence collected across every name variant of one entity
///
/// Owned by the aggregator, built once per invocation, consumed once by the
/// scorer. `variants` and `sanctions_lines` are carried for reporting only and
/// never influence the score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsintRecord {
    /// Relevant sanctions hits summed over all variants
    pub sanctions_hits: usize,

    /// Investigative search results, appended across variants and queries
    pub investigative: Vec<SearchItem>,

    /// OR-accumulated business-registry flags
    pub business_flags: BusinessFlags,

    /// Name variants that were searched
    pub variants: Vec<String>,

    /// Formatted sanctions hit lines, prefixed by the variant they came from
    pub sanctions_lines: Vec<String>,
}

impl OsintRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }
}
