//! Triage pipeline: collect evidence, then score it

use crate::collector::collect_osint;
use coritool_domain::traits::{SanctionsSource, SearchSource};
use coritool_domain::{EntityQuery, RiskReport};
use std::fmt::Display;
use tracing::info;

/// Runs the full triage for an entity against a pair of sources
///
/// # Examples
///
/// ```
/// use coritool_domain::{EntityQuery, RiskLevel};
/// use coritool_sources::{MockSanctions, MockSearch};
/// use coritool_triage::Triage;
///
/// let triage = Triage::new(MockSanctions::new(), MockSearch::new());
/// let report = triage.assess(&EntityQuery::person("John Smith"));
/// assert_eq!(report.score, 0);
/// assert_eq!(report.level, RiskLevel::Low);
/// ```
pub struct Triage<S, W> {
    sanctions: S,
    search: W,
}

impl<S, W> Triage<S, W>
where
    S: SanctionsSource,
    S::Error: Display,
    W: SearchSource,
    W::Error: Display,
{
    /// Create a new pipeline over the given sources
    pub fn new(sanctions: S, search: W) -> Self {
        Self { sanctions, search }
    }

    /// Get the sanctions source
    pub fn sanctions(&self) -> &S {
        &self.sanctions
    }

    /// Get the search source
    pub fn search(&self) -> &W {
        &self.search
    }

    /// Collect evidence for the entity and score it
    pub fn assess(&self, query: &EntityQuery) -> RiskReport {
        info!(entity = %query.name, schema = %query.schema, "Starting triage");

        let record = collect_osint(query, &self.sanctions, &self.search);
        let report = RiskReport::from_record(query, record);

        info!(
            entity = %report.entity,
            score = report.score,
            level = %report.level,
            "Triage complete"
        );

        report
    }
}
