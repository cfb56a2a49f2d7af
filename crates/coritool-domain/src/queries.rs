//! Investigative query generation

use crate::keywords::INVESTIGATIVE_TERMS;
use std::collections::BTreeSet;

/// Build the investigative search queries for an entity
///
/// Returns the entity alone plus `"<entity> <term>"` for every entry in
/// [`INVESTIGATIVE_TERMS`], deduplicated.
///
/// # Examples
///
/// ```
/// use coritool_domain::generate_investigative_queries;
///
/// let queries = generate_investigative_queries("John Smith");
/// assert_eq!(queries.len(), 10);
/// assert!(queries.contains("John Smith"));
/// assert!(queries.contains("John Smith OCCRP"));
/// ```
pub fn generate_investigative_queries(entity: &str) -> BTreeSet<String> {
    generate_investigative_queries_with(entity, INVESTIGATIVE_TERMS)
}

/// Build investigative queries from an explicit term table
pub fn generate_investigative_queries_with(entity: &str, terms: &[&str]) -> BTreeSet<String> {
    std::iter::once(entity.to_string())
        .chain(terms.iter().map(|term| format!("{} {}", entity, term)))
        .collect()
}
