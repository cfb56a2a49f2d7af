//! CoriTool CLI - OSINT triage for a person or company.

use clap::Parser;
use coritool_cli::{Cli, Config, Formatter};
use coritool_domain::EntityQuery;
use coritool_sources::{CustomSearchClient, OpenSanctionsClient, SourceConfig};
use coritool_triage::Triage;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Log to stderr so stdout carries only the report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> coritool_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled).with_details(cli.details);

    // Credentials are checked before any client exists
    let sources = SourceConfig::from_env(config.endpoints)?;
    debug!(
        engines = ?sources.engines.configured().collect::<Vec<_>>(),
        "Loaded source configuration"
    );

    let sanctions = OpenSanctionsClient::from_config(&sources)?;
    let search = CustomSearchClient::from_config(&sources)?;
    let triage = Triage::new(sanctions, search);

    let query = EntityQuery::new(cli.entity, cli.schema.into());
    let report = triage.assess(&query);

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
