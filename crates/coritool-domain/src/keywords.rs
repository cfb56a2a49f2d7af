//! Keyword tables used by the triage heuristics
//!
//! These are literal data. Every heuristic that consumes a table also has a
//! `*_with` variant taking an explicit slice, so callers can substitute a
//! smaller table without touching control flow.

/// Dataset/topic fragments that make a sanctions hit relevant.
///
/// Matched as lower-case substrings of the joined dataset and topic tags.
pub const SANCTIONS_RELEVANCE_TERMS: &[&str] = &[
    "sanction",
    "ua_",
    "ukraine",
    "nsdc",
    "russian",
    "corruption",
];

/// Terms appended to an entity name to build investigative search queries.
///
/// Anti-corruption bodies (NABU, SAP, HACC, ESBU, SBI), investigative
/// outlets, and the generic words for "investigation" and "corruption".
pub const INVESTIGATIVE_TERMS: &[&str] = &[
    "розслідування",
    "корупція",
    "НАБУ",
    "САП",
    "ВАКС",
    "БЕБ",
    "ДБР",
    "Bihus",
    "OCCRP",
];

/// High-risk phrases counted in investigative search results.
pub const HIGH_RISK_TERMS: &[&str] = &[
    "kickback",
    "embezzlement",
    "nabu",
    "набу",
    "bribe",
    "corruption scheme",
    "money laundering",
];

/// Name fragments indicating energy or reconstruction sector exposure.
pub const ENERGY_TERMS: &[&str] = &["energy", "nuclear", "power", "energo", "grid"];

/// "National Security and Defense Council" (lower-case).
pub const RNBO_TERM: &str = "рнбо";

/// "Owner" (lower-case).
pub const OWNER_TERM: &str = "власник";

/// "Beneficiary" (lower-case stem).
pub const BENEFICIARY_TERM: &str = "бенефіціар";

/// Ukrainian business-registry signal terms, grouped for substitution in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessTerms<'a> {
    /// Security-council term
    pub rnbo: &'a str,
    /// Ownership term
    pub owner: &'a str,
    /// Beneficial-ownership term
    pub beneficiary: &'a str,
}

/// The default business-registry terms.
pub const BUSINESS_TERMS: BusinessTerms<'static> = BusinessTerms {
    rnbo: RNBO_TERM,
    owner: OWNER_TERM,
    beneficiary: BENEFICIARY_TERM,
};
