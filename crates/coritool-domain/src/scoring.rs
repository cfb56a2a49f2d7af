//! Risk scoring: breakdown, level, reconstruction note, report

use crate::entity::{EntityQuery, Schema};
use crate::keywords::ENERGY_TERMS;
use crate::record::OsintRecord;
use crate::signals::{investigative_risk_boost, BusinessFlags, RiskBoost};
use std::fmt;

/// Points per relevant sanctions hit
pub const SANCTIONS_POINTS_PER_HIT: usize = 3;

/// Cap on the sanctions component
pub const SANCTIONS_POINTS_CAP: u8 = 6;

/// Points when any investigative result exists
pub const INVESTIGATIVE_PRESENCE_POINTS: u8 = 2;

/// Points for an RNBO mention
pub const RNBO_POINTS: u8 = 3;

/// Points for ownership or beneficiary language
pub const OWNERSHIP_POINTS: u8 = 2;

/// Upper bound of the score
pub const MAX_SCORE: u8 = 10;

/// Advisory when anti-corruption signals meet energy/reconstruction exposure
pub const RECONSTRUCTION_NOTE_ELEVATED: &str =
    "Medium-High: Anti-corruption signals combined with energy or reconstruction sector exposure.";

/// Advisory otherwise
pub const RECONSTRUCTION_NOTE_LOW: &str =
    "Low: No direct reconstruction-related corruption signals identified.";

/// Three-tier risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Score 0–3
    Low,
    /// Score 4–6
    Medium,
    /// Score 7–10
    High,
}

impl RiskLevel {
    /// Derive the level from a score
    ///
    /// # Examples
    ///
    /// ```
    /// use coritool_domain::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(7), RiskLevel::High);
    /// ```
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => RiskLevel::Low,
            4..=6 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    /// Get the label as printed in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-signal contributions to the score
///
/// The first four components are summed, then the boost is added and the
/// result clamped to [`MAX_SCORE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// `min(sanctions_hits * 3, 6)`
    pub sanctions: u8,

    /// 2 if any investigative result exists
    pub investigative: u8,

    /// 3 if the RNBO flag is set
    pub rnbo: u8,

    /// 2 if the owner or beneficiary flag is set
    pub ownership: u8,

    /// Investigative keyword boost (0, 4, or 6)
    pub boost: u8,
}

impl ScoreBreakdown {
    /// Compute the breakdown for an aggregated record and its risk boost
    pub fn compute(
        sanctions_hits: usize,
        has_investigative: bool,
        flags: BusinessFlags,
        boost: &RiskBoost,
    ) -> Self {
        let sanctions = sanctions_hits
            .saturating_mul(SANCTIONS_POINTS_PER_HIT)
            .min(SANCTIONS_POINTS_CAP as usize) as u8;

        Self {
            sanctions,
            investigative: if has_investigative { INVESTIGATIVE_PRESENCE_POINTS } else { 0 },
            rnbo: if flags.rnbo { RNBO_POINTS } else { 0 },
            ownership: if flags.has_ownership() { OWNERSHIP_POINTS } else { 0 },
            boost: boost.boost,
        }
    }

    /// The clamped total score
    pub fn total(&self) -> u8 {
        self.sanctions
            .saturating_add(self.investigative)
            .saturating_add(self.rnbo)
            .saturating_add(self.ownership)
            .saturating_add(self.boost)
            .min(MAX_SCORE)
    }
}

/// Pick the reconstruction-sector advisory
///
/// Elevated only when high-risk keywords matched *and* the entity name carries
/// one of [`ENERGY_TERMS`].
///
/// # Examples
///
/// ```
/// use coritool_domain::reconstruction_risk_note;
/// use coritool_domain::scoring::{RECONSTRUCTION_NOTE_ELEVATED, RECONSTRUCTION_NOTE_LOW};
///
/// let matched = vec!["bribe".to_string()];
/// assert_eq!(reconstruction_risk_note("Acme Energy", &matched), RECONSTRUCTION_NOTE_ELEVATED);
/// assert_eq!(reconstruction_risk_note("Acme Energy", &[]), RECONSTRUCTION_NOTE_LOW);
/// assert_eq!(reconstruction_risk_note("Acme Foods", &matched), RECONSTRUCTION_NOTE_LOW);
/// ```
pub fn reconstruction_risk_note(entity: &str, matched_keywords: &[String]) -> &'static str {
    reconstruction_risk_note_with(entity, matched_keywords, ENERGY_TERMS)
}

/// Pick the reconstruction-sector advisory using an explicit sector table
pub fn reconstruction_risk_note_with(
    entity: &str,
    matched_keywords: &[String],
    sector_terms: &[&str],
) -> &'static str {
    let entity = entity.to_lowercase();
    if !matched_keywords.is_empty() && sector_terms.iter().any(|term| entity.contains(term)) {
        RECONSTRUCTION_NOTE_ELEVATED
    } else {
        RECONSTRUCTION_NOTE_LOW
    }
}

/// Final triage result for one entity
///
/// Write-once: built from the aggregated record, printed, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskReport {
    /// Entity name as given
    pub entity: String,

    /// Screening schema
    pub schema: Schema,

    /// Score in `0..=10`
    pub score: u8,

    /// Label derived from the score
    pub level: RiskLevel,

    /// Reconstruction-sector advisory
    pub reconstruction_note: &'static str,

    /// Distinct high-risk keywords matched in investigative results
    pub matched_keywords: Vec<String>,

    /// Per-signal score contributions
    pub breakdown: ScoreBreakdown,

    /// The evidence the score was computed from
    pub record: OsintRecord,
}

impl RiskReport {
    /// Score an aggregated record
    ///
    /// # Examples
    ///
    /// ```
    /// use coritool_domain::{EntityQuery, OsintRecord, RiskLevel, RiskReport};
    ///
    /// let mut record = OsintRecord::new();
    /// record.sanctions_hits = 1;
    /// record.business_flags.rnbo = true;
    ///
    /// let report = RiskReport::from_record(&EntityQuery::person("John Smith"), record);
    /// assert_eq!(report.score, 6);
    /// assert_eq!(report.level, RiskLevel::Medium);
    /// ```
    pub fn from_record(query: &EntityQuery, record: OsintRecord) -> Self {
        let boost = investigative_risk_boost(&record.investigative);
        let breakdown = ScoreBreakdown::compute(
            record.sanctions_hits,
            !record.investigative.is_empty(),
            record.business_flags,
            &boost,
        );
        let score = breakdown.total();

        Self {
            entity: query.name.clone(),
            schema: query.schema,
            score,
            level: RiskLevel::from_score(score),
            reconstruction_note: reconstruction_risk_note(&query.name, &boost.matched),
            matched_keywords: boost.matched,
            breakdown,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchItem;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
        assert_eq!(RiskLevel::Medium.as_str(), "MEDIUM");
        assert_eq!(RiskLevel::High.as_str(), "HIGH");
    }

    #[test]
    fn test_sanctions_component_capped() {
        let none = RiskBoost::default();
        let flags = BusinessFlags::default();
        assert_eq!(ScoreBreakdown::compute(0, false, flags, &none).sanctions, 0);
        assert_eq!(ScoreBreakdown::compute(1, false, flags, &none).sanctions, 3);
        assert_eq!(ScoreBreakdown::compute(2, false, flags, &none).sanctions, 6);
        assert_eq!(ScoreBreakdown::compute(40, false, flags, &none).sanctions, 6);
        assert_eq!(ScoreBreakdown::compute(usize::MAX, false, flags, &none).sanctions, 6);
    }

    #[test]
    fn test_all_signals_clamped_to_ten() {
        let flags = BusinessFlags {
            rnbo: true,
            owner: true,
            beneficiary: true,
        };
        let boost = RiskBoost {
            boost: 6,
            hits: 5,
            matched: vec!["bribe".into()],
        };
        let breakdown = ScoreBreakdown::compute(5, true, flags, &boost);
        assert_eq!(
            breakdown.sanctions + breakdown.investigative + breakdown.rnbo + breakdown.ownership,
            13
        );
        assert_eq!(breakdown.total(), 10);
    }

    #[test]
    fn test_ownership_from_either_flag() {
        let none = RiskBoost::default();
        let beneficiary_only = BusinessFlags {
            beneficiary: true,
            ..Default::default()
        };
        assert_eq!(ScoreBreakdown::compute(0, false, beneficiary_only, &none).total(), 2);
    }

    #[test]
    fn test_report_from_empty_record() {
        let report =
            RiskReport::from_record(&EntityQuery::person("John Smith"), OsintRecord::new());
        assert_eq!(report.score, 0);
        assert_eq!(report.level, RiskLevel::Low);
        assert_eq!(report.reconstruction_note, RECONSTRUCTION_NOTE_LOW);
        assert!(report.matched_keywords.is_empty());
    }

    #[test]
    fn test_report_investigative_presence_and_boost() {
        let mut record = OsintRecord::new();
        record.investigative = vec![
            SearchItem::new("Grid operator bribe case", ""),
            SearchItem::new("Weather", "sunny"),
        ];
        let query = EntityQuery::new("National Grid Co", Schema::Company);
        let report = RiskReport::from_record(&query, record);
        assert_eq!(report.breakdown.investigative, 2);
        assert_eq!(report.breakdown.boost, 4);
        assert_eq!(report.score, 6);
        assert_eq!(report.reconstruction_note, RECONSTRUCTION_NOTE_ELEVATED);
    }

    #[test]
    fn test_reconstruction_note_case_insensitive() {
        let matched = vec!["nabu".to_string()];
        assert_eq!(reconstruction_risk_note("UKRENERGO", &matched), RECONSTRUCTION_NOTE_ELEVATED);
        assert_eq!(
            reconstruction_risk_note_with("Acme Rail", &matched, &["rail"]),
            RECONSTRUCTION_NOTE_ELEVATED
        );
    }
}
