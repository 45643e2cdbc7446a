// Store address equivalence between brand and retailer sites
use crate::extractors::postal::{
    extract_postal_code, has_required_components, mentions_shopping_centre, street_segment,
};
use crate::extractors::tokens::{has_token_overlap, is_format_difference};
use crate::normalize::normalize_address;
use crate::rules::{both_present, log_verdict, missing_info, FactComplianceChecker};
use shared_types::{ComplianceVerdict, FactKind, ReasonCode};

/// Decide whether two published addresses denote the same store location
pub fn check_address(brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
    let Some((brand, retailer)) = both_present(brand, retailer) else {
        return missing_info(FactKind::Address);
    };

    let normalized_brand = normalize_address(brand);
    let normalized_retailer = normalize_address(retailer);
    tracing::debug!(
        brand = %normalized_brand,
        retailer = %normalized_retailer,
        "Normalized addresses"
    );

    let verdict = decide(brand, retailer, &normalized_brand, &normalized_retailer);
    log_verdict(FactKind::Address, verdict)
}

fn decide(
    brand: &str,
    retailer: &str,
    normalized_brand: &str,
    normalized_retailer: &str,
) -> ComplianceVerdict {
    if normalized_brand == normalized_retailer {
        return ComplianceVerdict::compliant(ReasonCode::ExactMatch);
    }

    // Punctuation or line breaks only; compared on the raw text
    if has_token_overlap(normalized_brand, normalized_retailer)
        && is_format_difference(brand, retailer)
    {
        return ComplianceVerdict::compliant(ReasonCode::FormatDifferenceOnly);
    }

    if !has_required_components(normalized_retailer) {
        return ComplianceVerdict::non_compliant(ReasonCode::MissingComponents);
    }

    if !has_token_overlap(
        street_segment(normalized_brand),
        street_segment(normalized_retailer),
    ) {
        return ComplianceVerdict::non_compliant(ReasonCode::StreetMismatch);
    }

    match (
        extract_postal_code(normalized_brand),
        extract_postal_code(normalized_retailer),
    ) {
        (Some(ours), Some(theirs)) if ours == theirs => {}
        _ => return ComplianceVerdict::non_compliant(ReasonCode::PostalCodeMismatch),
    }

    if mentions_shopping_centre(normalized_brand) != mentions_shopping_centre(normalized_retailer)
    {
        return ComplianceVerdict::non_compliant(ReasonCode::ShoppingCentreMismatch);
    }

    ComplianceVerdict::non_compliant(ReasonCode::GenericMismatch)
}

/// Boolean form of [`check_address`]
pub fn is_address_compliant(brand: Option<&str>, retailer: Option<&str>) -> bool {
    check_address(brand, retailer).is_compliant
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddressChecker;

impl FactComplianceChecker for AddressChecker {
    fn kind(&self) -> FactKind {
        FactKind::Address
    }

    fn check(&self, brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
        check_address(brand, retailer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reason(brand: &str, retailer: &str) -> ReasonCode {
        check_address(Some(brand), Some(retailer)).reason
    }

    #[test]
    fn test_exact_match_after_normalization() {
        let verdict = check_address(
            Some("123 Main St, Springfield 12345"),
            Some("123 main st,   Springfield 12345"),
        );
        assert_eq!(verdict, ComplianceVerdict::compliant(ReasonCode::ExactMatch));
    }

    #[test]
    fn test_strasse_spelling_is_canonical() {
        let verdict = check_address(
            Some("Hauptstraße 5, 10115 Berlin"),
            Some("Hauptstrasse 5, 10115 Berlin"),
        );
        assert_eq!(verdict, ComplianceVerdict::compliant(ReasonCode::ExactMatch));
    }

    #[test]
    fn test_line_break_instead_of_comma_is_format_difference() {
        let verdict = check_address(Some("12 Main St, City"), Some("12 Main St\nCity"));
        assert_eq!(
            verdict,
            ComplianceVerdict::compliant(ReasonCode::FormatDifferenceOnly)
        );
    }

    #[test]
    fn test_high_overlap_with_different_content_is_not_format_difference() {
        // 4 of 5 tokens shared, but the locality is spelled differently
        assert_eq!(
            reason("12 Main St, Springfield 12345", "12 Main St, Springfeld 12345"),
            ReasonCode::GenericMismatch
        );
    }

    #[test]
    fn test_missing_components_on_retailer_side() {
        assert_eq!(
            reason("12 Main St, Springfield 12345", "Springfield"),
            ReasonCode::MissingComponents
        );
        assert_eq!(
            reason("12 Main St, Springfield 12345", "Main Street, Springfield"),
            ReasonCode::MissingComponents
        );
    }

    #[test]
    fn test_street_mismatch() {
        assert_eq!(
            reason("123 Main St, Springfield 12345", "456 Oak Ave, Springfield 12345"),
            ReasonCode::StreetMismatch
        );
    }

    #[test]
    fn test_postal_code_mismatch() {
        assert_eq!(
            reason("Hauptstrasse 5, 10115 Berlin", "Hauptstrasse 5, 10117 Berlin"),
            ReasonCode::PostalCodeMismatch
        );
        assert_eq!(
            reason("Hauptstrasse 5, Berlin Mitte", "Hauptstrasse 5, Berlin"),
            ReasonCode::PostalCodeMismatch
        );
    }

    #[test]
    fn test_shopping_centre_mismatch() {
        assert_eq!(
            reason(
                "Unit 12 Westfield, Ariel Way, 12345 London",
                "Unit 12 Westfield, Shopping Centre Ariel Way, 12345 London"
            ),
            ReasonCode::ShoppingCentreMismatch
        );
    }

    #[test]
    fn test_generic_mismatch_when_no_specific_rule_applies() {
        assert_eq!(
            reason(
                "1 Rue de la Paix, 75002 Paris",
                "1 Rue de la Paix, 2nd floor, 75002 Paris"
            ),
            ReasonCode::GenericMismatch
        );
    }

    #[test]
    fn test_missing_info() {
        assert_eq!(
            check_address(None, Some("1 Rue de la Paix, 75002 Paris")),
            ComplianceVerdict::non_compliant(ReasonCode::MissingInfo)
        );
        assert!(!is_address_compliant(Some("   "), Some("x")));
    }

    #[test]
    fn test_checker_trait_matches_function() {
        let checker = AddressChecker;
        assert_eq!(checker.kind(), FactKind::Address);
        assert_eq!(
            checker.check(Some("a 1 b"), Some("a 1 b")),
            check_address(Some("a 1 b"), Some("a 1 b"))
        );
    }
}
