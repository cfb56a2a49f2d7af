//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use coritool_domain::{RiskLevel, RiskReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RULE: &str = "==============================";

/// Closing line of every text report.
pub const MANUAL_REVIEW_NOTE: &str =
    "Note: This is a public OSINT triage output. Manual review required.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    details: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            details: false,
        }
    }

    /// Append the evidence sections to text reports.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Format a triage report.
    pub fn format_report(&self, report: &RiskReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Text => Ok(self.format_report_text(report)),
        }
    }

    /// Format a report as pretty JSON.
    fn format_report_json(&self, report: &RiskReport) -> Result<String> {
        let record = &report.record;
        let investigative: Vec<serde_json::Value> = record
            .investigative
            .iter()
            .map(|item| {
                serde_json::json!({
                    "title": item.title,
                    "snippet": item.snippet,
                    "link": item.link,
                })
            })
            .collect();

        let value = serde_json::json!({
            "entity": report.entity,
            "schema": report.schema.as_str(),
            "score": report.score,
            "level": report.level.as_str(),
            "reconstruction_note": report.reconstruction_note,
            "matched_keywords": report.matched_keywords,
            "breakdown": {
                "sanctions": report.breakdown.sanctions,
                "investigative": report.breakdown.investigative,
                "rnbo": report.breakdown.rnbo,
                "ownership": report.breakdown.ownership,
                "boost": report.breakdown.boost,
            },
            "variants": record.variants,
            "sanctions_hits": record.sanctions_hits,
            "sanctions_lines": record.sanctions_lines,
            "business_flags": {
                "rnbo": record.business_flags.rnbo,
                "owner": record.business_flags.owner,
                "beneficiary": record.business_flags.beneficiary,
            },
            "investigative": investigative,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a report as the plain-text triage summary.
    fn format_report_text(&self, report: &RiskReport) -> String {
        let label = self.colorize_level(report.level);
        let mut lines = vec![
            String::new(),
            RULE.to_string(),
            format!("ENTITY: {}", report.entity),
            RULE.to_string(),
            format!("OVERALL RISK: {} ({}/10)", label, report.score),
            String::new(),
            "Reconstruction / Donor Risk:".to_string(),
            report.reconstruction_note.to_string(),
            String::new(),
            MANUAL_REVIEW_NOTE.to_string(),
        ];

        if self.details {
            lines.push(String::new());
            lines.push(self.format_details(report));
        }

        lines.join("\n")
    }

    /// Format the evidence sections.
    fn format_details(&self, report: &RiskReport) -> String {
        let record = &report.record;
        let mut sections = Vec::new();

        sections.push(self.heading("Name variants searched:"));
        sections.extend(record.variants.iter().map(|v| format!("  - {}", v)));

        sections.push(String::new());
        sections.push(self.heading("Score breakdown:"));
        sections.push(self.breakdown_table(report));

        sections.push(String::new());
        sections.push(self.heading("High-risk keywords:"));
        if report.matched_keywords.is_empty() {
            sections.push("  (none)".to_string());
        } else {
            sections.push(format!("  {}", report.matched_keywords.join(", ")));
        }

        sections.push(String::new());
        sections.push(self.heading("Sanctions results:"));
        if record.sanctions_lines.is_empty() {
            sections.push("  (none)".to_string());
        } else {
            sections.extend(record.sanctions_lines.iter().map(|line| format!("  {}", line)));
        }

        sections.join("\n")
    }

    fn breakdown_table(&self, report: &RiskReport) -> String {
        let b = &report.breakdown;
        let mut builder = Builder::default();
        builder.push_record(["Signal", "Points"]);
        builder.push_record(["Sanctions hits".to_string(), b.sanctions.to_string()]);
        builder.push_record(["Investigative presence".to_string(), b.investigative.to_string()]);
        builder.push_record(["RNBO mention".to_string(), b.rnbo.to_string()]);
        builder.push_record(["Ownership mention".to_string(), b.ownership.to_string()]);
        builder.push_record(["Keyword boost".to_string(), b.boost.to_string()]);
        builder.push_record(["Total (max 10)".to_string(), report.score.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize the risk label if color is enabled.
    fn colorize_level(&self, level: RiskLevel) -> String {
        let text = level.as_str();
        if !self.color_enabled {
            return text.to_string();
        }

        match level {
            RiskLevel::Low => text.green().to_string(),
            RiskLevel::Medium => text.yellow().to_string(),
            RiskLevel::High => text.red().bold().to_string(),
        }
    }
}
