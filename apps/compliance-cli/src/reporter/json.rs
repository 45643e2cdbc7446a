use anyhow::{Context, Result};
use serde::Serialize;
use shared_types::{ComplianceSummary, StoreComplianceReport};

/// Report plus its derived outcome, as written to JSON
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a StoreComplianceReport,
    compliant: bool,
    summary: ComplianceSummary,
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn format(report: &StoreComplianceReport, pretty: bool) -> Result<String> {
        let output = JsonReport {
            report,
            compliant: report.is_fully_compliant(),
            summary: report.summary(),
        };

        if pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }
        .context("Failed to serialize compliance report")
    }
}
