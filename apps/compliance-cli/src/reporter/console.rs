use shared_types::StoreComplianceReport;
use std::fmt::Write;

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format(report: &StoreComplianceReport) -> String {
        let mut out = String::new();
        let summary = report.summary();

        let _ = writeln!(out, "=== Validation Summary: {} ===", report.store);
        for result in &report.results {
            let _ = writeln!(
                out,
                "{:<8} {} ({}: {})",
                format!("{}:", result.kind.label()),
                pass_fail(result.verdict.is_compliant),
                result.verdict.reason,
                result.verdict.reason.description()
            );
        }
        let _ = writeln!(
            out,
            "Overall: {} ({}/{} facts compliant)",
            pass_fail(report.is_fully_compliant()),
            summary.passed,
            summary.total
        );
        out.push_str("=========================");

        out
    }
}
