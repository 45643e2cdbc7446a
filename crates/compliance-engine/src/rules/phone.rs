// Store phone number equivalence between brand and retailer sites
use crate::normalize::normalize_phone_number;
use crate::patterns::{COUNTRY_CODE_DIGITS, INTERNATIONAL_PREFIX, LOCAL_NUMBER_MAX_DIGITS};
use crate::rules::{both_present, log_verdict, missing_info, FactComplianceChecker};
use shared_types::{ComplianceVerdict, FactKind, ReasonCode};

/// Decide whether two published phone numbers reach the same line
pub fn check_phone(brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
    let Some((brand, retailer)) = both_present(brand, retailer) else {
        return missing_info(FactKind::PhoneNumber);
    };

    let brand = normalize_phone_number(brand);
    let retailer = normalize_phone_number(retailer);
    tracing::debug!(%brand, %retailer, "Normalized phone numbers");

    let verdict = if brand == retailer {
        ComplianceVerdict::compliant(ReasonCode::ExactMatch)
    } else if local_form(&brand) == local_form(&retailer) {
        ComplianceVerdict::compliant(ReasonCode::CountryCodeDifference)
    } else {
        ComplianceVerdict::non_compliant(ReasonCode::NumberMismatch)
    };
    log_verdict(FactKind::PhoneNumber, verdict)
}

/// Digits left once a presumed country code is dropped.
///
/// Numbers longer than [`LOCAL_NUMBER_MAX_DIGITS`] lose an optional `00`
/// prefix and then a fixed [`COUNTRY_CODE_DIGITS`] digits, whatever the
/// real country code length is. Shorter numbers are already local.
pub fn local_form(digits: &str) -> &str {
    if digits.len() <= LOCAL_NUMBER_MAX_DIGITS {
        return digits;
    }
    let national = digits.strip_prefix(INTERNATIONAL_PREFIX).unwrap_or(digits);
    national.get(COUNTRY_CODE_DIGITS..).unwrap_or_default()
}

/// Boolean form of [`check_phone`]
pub fn is_phone_number_compliant(brand: Option<&str>, retailer: Option<&str>) -> bool {
    check_phone(brand, retailer).is_compliant
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberChecker;

impl FactComplianceChecker for PhoneNumberChecker {
    fn kind(&self) -> FactKind {
        FactKind::PhoneNumber
    }

    fn check(&self, brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
        check_phone(brand, retailer)
    }
}
