//! Fact compliance rules
//!
//! One checker per fact kind. Each runs an ordered decision pipeline over
//! the brand value and the retailer value; the first rule that applies
//! decides the verdict.

pub mod address;
pub mod opening_hours;
pub mod phone;

pub use address::{check_address, AddressChecker};
pub use opening_hours::{check_opening_hours, OpeningHoursChecker};
pub use phone::{check_phone, PhoneNumberChecker};

use shared_types::{ComplianceVerdict, FactKind, ReasonCode};

/// Shared shape of the three fact checkers
pub trait FactComplianceChecker: Send + Sync {
    /// Fact kind this checker compares
    fn kind(&self) -> FactKind;

    /// Compare the brand value against the retailer value
    fn check(&self, brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict;
}

/// All checkers, in report order
pub fn all_checkers() -> Vec<Box<dyn FactComplianceChecker>> {
    vec![
        Box::new(AddressChecker),
        Box::new(PhoneNumberChecker),
        Box::new(OpeningHoursChecker),
    ]
}

/// Checker for a single fact kind
pub fn checker_for(kind: FactKind) -> Box<dyn FactComplianceChecker> {
    match kind {
        FactKind::Address => Box::new(AddressChecker),
        FactKind::PhoneNumber => Box::new(PhoneNumberChecker),
        FactKind::OpeningHours => Box::new(OpeningHoursChecker),
    }
}

/// Both values when neither is absent or blank; absence and empty text are the same thing
pub(crate) fn both_present<'a>(
    brand: Option<&'a str>,
    retailer: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    let present = |value: Option<&'a str>| value.filter(|v| !v.trim().is_empty());
    Some((present(brand)?, present(retailer)?))
}

pub(crate) fn missing_info(kind: FactKind) -> ComplianceVerdict {
    tracing::warn!("NOT COMPLIANT: {} is missing on at least one site", kind);
    ComplianceVerdict::non_compliant(ReasonCode::MissingInfo)
}

/// Log a verdict at the level matching its outcome
pub(crate) fn log_verdict(kind: FactKind, verdict: ComplianceVerdict) -> ComplianceVerdict {
    if verdict.is_compliant {
        tracing::info!(reason = %verdict.reason, "COMPLIANT: {} {}", kind, verdict.reason.description());
    } else {
        tracing::warn!(reason = %verdict.reason, "NOT COMPLIANT: {} {}", kind, verdict.reason.description());
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present_treats_blank_as_absent() {
        assert_eq!(both_present(Some("a"), Some("b")), Some(("a", "b")));
        assert_eq!(both_present(None, Some("b")), None);
        assert_eq!(both_present(Some("a"), Some("")), None);
        assert_eq!(both_present(Some(" \n\t"), Some("b")), None);
    }

    #[test]
    fn test_all_checkers_cover_every_kind_in_order() {
        let kinds: Vec<_> = all_checkers().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, FactKind::ALL.to_vec());
    }

    #[test]
    fn test_checker_for_dispatches_by_kind() {
        for kind in FactKind::ALL {
            assert_eq!(checker_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_missing_info_dominates_every_checker() {
        for checker in all_checkers() {
            for (brand, retailer) in [
                (None, Some("12 Main St, City 12345")),
                (Some(""), Some("anything")),
                (Some("  "), None),
                (Some("Monday 9h00-18h00"), Some("")),
            ] {
                let verdict = checker.check(brand, retailer);
                assert!(!verdict.is_compliant);
                assert_eq!(verdict.reason, ReasonCode::MissingInfo);
            }
        }
    }
}
