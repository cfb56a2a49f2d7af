//! Command-line argument parsing.

use clap::Parser;
use coritool_domain::Schema;

/// CoriTool - OSINT triage for corruption and reconstruction-sector risk.
#[derive(Debug, Parser)]
#[command(name = "coritool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Person or company name to screen
    pub entity: String,

    /// Entity schema for the sanctions lookup
    #[arg(long, value_enum, ignore_case = true, default_value = "person")]
    pub schema: SchemaArg,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append variants, score breakdown, keywords, and sanctions lines
    #[arg(long)]
    pub details: bool,

    /// Configuration file path
    #[arg(short, long, env = "CORITOOL_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Schema argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaArg {
    /// Natural person
    Person,
    /// Legal entity
    Company,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain-text report (default)
    Text,
    /// JSON report
    Json,
}

impl Cli {
    /// Default log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl From<SchemaArg> for Schema {
    fn from(schema: SchemaArg) -> Self {
        match schema {
            SchemaArg::Person => Schema::Person,
            SchemaArg::Company => Schema::Company,
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
