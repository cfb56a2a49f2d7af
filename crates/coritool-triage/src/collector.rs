//! OSINT collection across name variants
//!
//! Failed lookups are replaced with empty defaults here, at the call site, so
//! a partial outage lowers the score instead of aborting the run.

use coritool_domain::traits::{SanctionsSource, SearchSource, SEARCH_RESULT_LIMIT};
use coritool_domain::{
    analyze_business_signals, generate_investigative_queries, generate_name_variants,
    EntityQuery, OsintRecord, SanctionsLookup, Schema, SearchCategory, SearchItem,
};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Look up one name, substituting the failure default on error
pub fn check_sanctions<S>(sanctions: &S, name: &str, schema: Schema) -> SanctionsLookup
where
    S: SanctionsSource,
    S::Error: Display,
{
    match sanctions.search_sanctions(name, schema) {
        Ok(hits) => SanctionsLookup::from_hits(&hits),
        Err(e) => {
            warn!(name, error = %e, "Sanctions lookup failed, counting zero hits");
            SanctionsLookup::failed(e)
        }
    }
}

/// Run one search, substituting an empty list on error
pub fn search_or_empty<W>(
    search: &W,
    query: &str,
    category: SearchCategory,
    limit: usize,
) -> Vec<SearchItem>
where
    W: SearchSource,
    W::Error: Display,
{
    match search.search(query, category, limit) {
        Ok(items) => items,
        Err(e) => {
            warn!(%category, query, error = %e, "Search failed, using no results");
            Vec::new()
        }
    }
}

/// Collect sanctions, investigative, and business evidence for an entity
///
/// For every name variant: one sanctions lookup, one investigative search per
/// generated query, and one business search. Identical queries across
/// variants are not deduplicated.
pub fn collect_osint<S, W>(query: &EntityQuery, sanctions: &S, search: &W) -> OsintRecord
where
    S: SanctionsSource,
    S::Error: Display,
    W: SearchSource,
    W::Error: Display,
{
    let mut record = OsintRecord::new();

    for variant in generate_name_variants(&query.name) {
        debug!(variant = %variant, "Collecting evidence for variant");

        let lookup = check_sanctions(sanctions, &variant, query.schema);
        record.sanctions_hits += lookup.relevant_hits;
        record
            .sanctions_lines
            .extend(lookup.lines.into_iter().map(|line| format!("[{}] {}", variant, line)));

        for q in generate_investigative_queries(&variant) {
            let items =
                search_or_empty(search, &q, SearchCategory::Investigative, SEARCH_RESULT_LIMIT);
            record.investigative.extend(items);
        }

        let business =
            search_or_empty(search, &variant, SearchCategory::Business, SEARCH_RESULT_LIMIT);
        record.business_flags.merge(analyze_business_signals(&business));

        record.variants.push(variant);
    }

    info!(
        entity = %query.name,
        variants = record.variants.len(),
        sanctions_hits = record.sanctions_hits,
        investigative = record.investigative.len(),
        "OSINT collection complete"
    );

    record
}
