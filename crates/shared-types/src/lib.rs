pub mod types;

pub use types::{
    ComplianceSummary, ComplianceVerdict, FactCheckResult, FactKind, ReasonCode,
    StoreComplianceReport,
};
