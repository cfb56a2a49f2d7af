//! Sanctions-screening model and relevance counting

use crate::keywords::SANCTIONS_RELEVANCE_TERMS;
use std::fmt;

/// Caption used when the API returns a hit without one
pub const UNKNOWN_CAPTION: &str = "Unknown";

/// A single sanctions-search hit
///
/// Read once, reduced to a relevance count and a display line, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctionsHit {
    /// Display name of the matched entity
    pub caption: String,

    /// Source datasets (e.g. `ua_nsdc_sanctions`)
    pub datasets: Vec<String>,

    /// Topic tags (e.g. `sanction`, `role.pep`)
    pub topics: Vec<String>,
}

impl SanctionsHit {
    /// Create a new hit
    pub fn new(caption: impl Into<String>, datasets: Vec<String>, topics: Vec<String>) -> Self {
        Self {
            caption: caption.into(),
            datasets,
            topics,
        }
    }

    /// Check the hit against [`SANCTIONS_RELEVANCE_TERMS`]
    pub fn is_relevant(&self) -> bool {
        self.is_relevant_with(SANCTIONS_RELEVANCE_TERMS)
    }

    /// Check the hit against an explicit term table
    ///
    /// The joined dataset list and joined topic list are concatenated and
    /// lower-cased; any term occurring as a substring makes the hit relevant.
    pub fn is_relevant_with(&self, terms: &[&str]) -> bool {
        let tags = format!("{}{}", self.datasets.join(", "), self.topics.join(", ")).to_lowercase();
        terms.iter().any(|term| tags.contains(term))
    }
}

impl fmt::Display for SanctionsHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.caption,
            self.datasets.join(", "),
            self.topics.join(", ")
        )
    }
}

/// Outcome of one sanctions lookup, reduced for aggregation
///
/// `relevant_hits` counts hits, not keyword matches: a hit matching several
/// terms still counts once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanctionsLookup {
    /// Formatted hit lines (or a single error line on failure)
    pub lines: Vec<String>,

    /// Number of relevant hits
    pub relevant_hits: usize,
}

impl SanctionsLookup {
    /// Reduce a list of hits using [`SANCTIONS_RELEVANCE_TERMS`]
    ///
    /// # Examples
    ///
    /// ```
    /// use coritool_domain::{SanctionsHit, SanctionsLookup};
    ///
    /// let hits = vec![
    ///     SanctionsHit::new("A", vec!["ua_nsdc_sanctions".into()], vec!["sanction".into()]),
    ///     SanctionsHit::new("B", vec!["us_ofac_sdn".into()], vec![]),
    /// ];
    /// let lookup = SanctionsLookup::from_hits(&hits);
    /// assert_eq!(lookup.relevant_hits, 1);
    /// assert_eq!(lookup.lines[0], "A | ua_nsdc_sanctions | sanction");
    /// ```
    pub fn from_hits(hits: &[SanctionsHit]) -> Self {
        Self::from_hits_with(hits, SANCTIONS_RELEVANCE_TERMS)
    }

    /// Reduce a list of hits using an explicit term table
    pub fn from_hits_with(hits: &[SanctionsHit], terms: &[&str]) -> Self {
        Self {
            lines: hits.iter().map(ToString::to_string).collect(),
            relevant_hits: hits.iter().filter(|hit| hit.is_relevant_with(terms)).count(),
        }
    }

    /// The degraded result substituted for a failed lookup
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self {
            lines: vec![format!("Error: {}", reason)],
            relevant_hits: 0,
        }
    }
}
