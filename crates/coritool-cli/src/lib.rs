//! CoriTool CLI library.
//!
//! Argument parsing, configuration loading, and report formatting for the
//! `coritool` binary. The binary wires these to the source clients and the
//! triage pipeline.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
