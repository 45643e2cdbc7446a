//! Cross-source store fact compliance
//!
//! Decides whether a store's address, phone number and opening hours, as
//! published on the brand site and on a retailer site, describe the same
//! real-world fact despite formatting, language and abbreviation
//! differences.
//!
//! Every check is a pure function over two optional strings. It never
//! fails: absent, empty or malformed input resolves to a
//! [`ComplianceVerdict`] with a [`ReasonCode`].
//!
//! ```
//! use compliance_engine::check_phone;
//!
//! let verdict = check_phone(Some("+33 1 42 68 53 00"), Some("0033142685300"));
//! assert!(verdict.is_compliant);
//! ```

pub mod extractors;
pub mod normalize;
pub mod patterns;
pub mod rules;
pub mod schedule;
pub mod source;

pub use rules::address::is_address_compliant;
pub use rules::opening_hours::is_opening_hours_compliant;
pub use rules::phone::is_phone_number_compliant;
pub use rules::{
    all_checkers, check_address, check_opening_hours, check_phone, checker_for,
    FactComplianceChecker,
};
pub use schedule::WeeklySchedule;
pub use shared_types::{
    ComplianceVerdict, FactCheckResult, FactKind, ReasonCode, StoreComplianceReport,
};
pub use source::{FactSource, StaticFactSource};

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Check a single fact kind
    pub fn check_fact(
        &self,
        kind: FactKind,
        brand: Option<&str>,
        retailer: Option<&str>,
    ) -> ComplianceVerdict {
        checker_for(kind).check(brand, retailer)
    }

    /// Fetch every fact from both sources and check each one
    pub fn check_store(
        &self,
        store: &str,
        brand: &impl FactSource,
        retailer: &impl FactSource,
    ) -> StoreComplianceReport {
        self.check_facts(store, brand, retailer, &FactKind::ALL)
    }

    /// Fetch and check only the given fact kinds, in the given order
    pub fn check_facts(
        &self,
        store: &str,
        brand: &impl FactSource,
        retailer: &impl FactSource,
        kinds: &[FactKind],
    ) -> StoreComplianceReport {
        tracing::info!(
            store,
            brand = brand.name(),
            retailer = retailer.name(),
            "Checking store compliance"
        );

        let results = kinds
            .iter()
            .map(|&kind| {
                let brand_value = brand.fetch(kind);
                let retailer_value = retailer.fetch(kind);
                if brand_value.is_none() || retailer_value.is_none() {
                    tracing::debug!(%kind, "Fact not found on at least one source");
                }

                let verdict =
                    self.check_fact(kind, brand_value.as_deref(), retailer_value.as_deref());
                FactCheckResult {
                    kind,
                    verdict,
                    brand_value,
                    retailer_value,
                }
            })
            .collect();

        StoreComplianceReport {
            store: store.to_string(),
            results,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
