//! CoriTool Triage
//!
//! Application layer: drives the sources across every name variant of an
//! entity and turns the collected evidence into a [`RiskReport`].
//!
//! # Architecture
//!
//! ```text
//! EntityQuery → variants → SanctionsSource / SearchSource → OsintRecord → RiskReport
//! ```
//!
//! The pipeline is synchronous and sequential. Per-call failures never
//! propagate: a failed sanctions lookup counts zero hits and a failed search
//! contributes no results, so a partial outage can only understate the score.
//!
//! # Example Usage
//!
//! ```no_run
//! use coritool_domain::{EntityQuery, Schema};
//! use coritool_sources::{CustomSearchClient, Endpoints, OpenSanctionsClient, SourceConfig};
//! use coritool_triage::Triage;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SourceConfig::from_env(Endpoints::default())?;
//! let triage = Triage::new(
//!     OpenSanctionsClient::from_config(&config)?,
//!     CustomSearchClient::from_config(&config)?,
//! );
//!
//! let report = triage.assess(&EntityQuery::new("Acme Energy", Schema::Company));
//! println!("{} ({}/10)", report.level, report.score);
//! # Ok(())
//! # }
//! ```
//!
//! [`RiskReport`]: coritool_domain::RiskReport

#![warn(missing_docs)]

mod collector;
mod triage;

pub use collector::{check_sanctions, collect_osint, search_or_empty};
pub use triage::Triage;
