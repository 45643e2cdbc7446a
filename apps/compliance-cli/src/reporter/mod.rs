//! Compliance report output
//!
//! - **Console**: one PASS/FAIL line per fact, then the overall outcome
//! - **JSON**: machine-readable report for CI pipelines

mod console;
mod json;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared_types::StoreComplianceReport;
use std::io::{self, Write};

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for compliance reports
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable validation summary
    #[default]
    Console,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &StoreComplianceReport) -> Result<()> {
        let output = self.format_report(report)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn format_report(&self, report: &StoreComplianceReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(ConsoleReporter::format(report)),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
