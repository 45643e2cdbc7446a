// Address component extraction
use crate::patterns::{
    ADDRESS_SHAPE_PATTERN, NUMBER_FIRST_ADDRESS_SHAPE_PATTERN, POSTAL_CODE_PATTERN,
    SHOPPING_CENTRE_KEYWORDS,
};

/// First standalone 5-digit group, if any
pub fn extract_postal_code(address: &str) -> Option<&str> {
    POSTAL_CODE_PATTERN.find(address).map(|m| m.as_str())
}

/// Text before the first comma
pub fn street_segment(address: &str) -> &str {
    address.split(',').next().unwrap_or_default()
}

/// Whether the address mentions a shopping centre or mall
pub fn mentions_shopping_centre(address: &str) -> bool {
    let address = address.to_lowercase();
    SHOPPING_CENTRE_KEYWORDS
        .iter()
        .any(|keyword| address.contains(keyword))
}

/// Whether an address has a number and alternating text/number segments
/// (`Hauptstrasse 5, Berlin` or `12 Main St, Springfield 12345`)
pub fn has_required_components(address: &str) -> bool {
    let has_number = address.chars().any(|c| c.is_ascii_digit());
    has_number
        && (ADDRESS_SHAPE_PATTERN.is_match(address)
            || NUMBER_FIRST_ADDRESS_SHAPE_PATTERN.is_match(address))
}
