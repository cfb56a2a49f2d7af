//! Keyword signal extractors over search results

use crate::keywords::{BusinessTerms, BUSINESS_TERMS, HIGH_RISK_TERMS};
use crate::search::SearchItem;

/// Boost for two or more high-risk keyword hits
pub const BOOST_MULTIPLE_HITS: u8 = 6;

/// Boost for exactly one high-risk keyword hit
pub const BOOST_SINGLE_HIT: u8 = 4;

/// Business-registry flags
///
/// Monotonic: merging only ever turns flags on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessFlags {
    /// Mentions of the National Security and Defense Council (RNBO)
    pub rnbo: bool,

    /// Ownership language
    pub owner: bool,

    /// Beneficial-ownership language
    pub beneficiary: bool,
}

impl BusinessFlags {
    /// OR-merge another set of flags into this one
    pub fn merge(&mut self, other: BusinessFlags) {
        self.rnbo |= other.rnbo;
        self.owner |= other.owner;
        self.beneficiary |= other.beneficiary;
    }

    /// Whether any ownership or beneficiary language was seen
    pub fn has_ownership(&self) -> bool {
        self.owner || self.beneficiary
    }
}

/// Scan business-search results for registry signal terms
///
/// # Examples
///
/// ```
/// use coritool_domain::{analyze_business_signals, SearchItem};
///
/// let items = vec![SearchItem::new("ТОВ Приклад", "Кінцевий бенефіціар: ...")];
/// let flags = analyze_business_signals(&items);
/// assert!(flags.beneficiary);
/// assert!(!flags.rnbo);
/// ```
pub fn analyze_business_signals(items: &[SearchItem]) -> BusinessFlags {
    analyze_business_signals_with(items, &BUSINESS_TERMS)
}

/// Scan business-search results using explicit terms
pub fn analyze_business_signals_with(
    items: &[SearchItem],
    terms: &BusinessTerms<'_>,
) -> BusinessFlags {
    let mut flags = BusinessFlags::default();

    for item in items {
        let text = item.haystack();
        flags.merge(BusinessFlags {
            rnbo: text.contains(terms.rnbo),
            owner: text.contains(terms.owner),
            beneficiary: text.contains(terms.beneficiary),
        });
    }

    flags
}

/// Score adjustment derived from investigative results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskBoost {
    /// Additive score boost (0, 4, or 6)
    pub boost: u8,

    /// Total keyword hits: one per (item, keyword) pair that matched
    pub hits: usize,

    /// Distinct keywords matched anywhere, in table order
    pub matched: Vec<String>,
}

/// Count high-risk keywords in investigative results and map them to a boost
///
/// Every keyword contained in an item's text is one hit, so a single item can
/// contribute several hits and the same keyword counts again in each item it
/// appears in. Two or more hits give a boost of 6, exactly one gives 4, none
/// gives 0 with an empty matched list.
///
/// # Examples
///
/// ```
/// use coritool_domain::{investigative_risk_boost, SearchItem};
///
/// let items = vec![
///     SearchItem::new("Official took a bribe", ""),
///     SearchItem::new("", "Alleged kickback scheme"),
/// ];
/// let boost = investigative_risk_boost(&items);
/// assert_eq!(boost.boost, 6);
/// assert_eq!(boost.matched, vec!["kickback", "bribe"]);
/// ```
pub fn investigative_risk_boost(items: &[SearchItem]) -> RiskBoost {
    investigative_risk_boost_with(items, HIGH_RISK_TERMS)
}

/// Compute the risk boost using an explicit keyword table
pub fn investigative_risk_boost_with(items: &[SearchItem], terms: &[&str]) -> RiskBoost {
    let mut hits = 0usize;
    let mut seen = vec![false; terms.len()];

    for item in items {
        let text = item.haystack();
        for (i, term) in terms.iter().enumerate() {
            if text.contains(term) {
                hits += 1;
                seen[i] = true;
            }
        }
    }

    let boost = match hits {
        0 => return RiskBoost::default(),
        1 => BOOST_SINGLE_HIT,
        _ => BOOST_MULTIPLE_HITS,
    };

    let matched = terms
        .iter()
        .zip(seen)
        .filter_map(|(term, hit)| hit.then(|| term.to_string()))
        .collect();

    RiskBoost {
        boost,
        hits,
        matched,
    }
}
