//! CoriTool Domain Layer
//!
//! This crate contains the triage model and the keyword heuristics that turn
//! raw OSINT evidence into a risk score. It has no external dependencies and
//! performs no I/O: sanctions and search lookups are reached through the
//! traits in [`traits`], implemented by infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **Entity query**: a name plus a [`Schema`] (`Person` or `Company`)
//! - **Name variants**: token-order permutations that broaden search recall
//! - **Relevance hit**: a sanctions result tagged with a watched dataset or topic
//! - **Business flags**: ownership and security-council language in registry results
//! - **Risk boost**: score adjustment from high-risk investigative keywords
//!
//! ## Pipeline
//!
//! ```text
//! EntityQuery → variants → (sanctions, investigative, business) → OsintRecord → RiskReport
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod keywords;
pub mod queries;
pub mod record;
pub mod sanctions;
pub mod scoring;
pub mod search;
pub mod signals;
pub mod traits;
pub mod variants;

// Re-exports for convenience
pub use entity::{EntityQuery, Schema};
pub use queries::generate_investigative_queries;
pub use record::OsintRecord;
pub use sanctions::{SanctionsHit, SanctionsLookup};
pub use scoring::{reconstruction_risk_note, RiskLevel, RiskReport, ScoreBreakdown};
pub use search::{SearchCategory, SearchItem};
pub use signals::{analyze_business_signals, investigative_risk_boost, BusinessFlags, RiskBoost};
pub use variants::generate_name_variants;
