//! Text normalization applied before any comparison
//!
//! Every normalizer is deterministic and idempotent:
//! `normalize(normalize(x)) == normalize(x)`.

use crate::patterns::{
    CLOSED_MARKER, CLOSED_SYNONYM_PATTERN, DAY_NAME_PATTERNS, MERIDIEM_PATTERN,
    RANGE_DASH_PATTERN, TIME_SEPARATOR_PATTERN, ZERO_PADDED_HOUR_PATTERN,
};

/// Collapse whitespace runs into single spaces and trim
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-case, canonicalize `ß` to `ss` (so `straße` becomes `strasse`), collapse whitespace
pub fn normalize_address(address: &str) -> String {
    let lower = address.to_lowercase().replace('ß', "ss");
    collapse_whitespace(&lower)
}

/// Keep only the ASCII digits
pub fn normalize_phone_number(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize opening hours line by line, keeping one line per schedule entry
pub fn normalize_opening_hours(hours: &str) -> String {
    hours
        .to_lowercase()
        .lines()
        .map(normalize_hours_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_hours_line(line: &str) -> String {
    let line = MERIDIEM_PATTERN.replace_all(line, "$1");
    let line = TIME_SEPARATOR_PATTERN.replace_all(&line, "h$1");
    let line = ZERO_PADDED_HOUR_PATTERN.replace_all(&line, "${1}h");
    let line = RANGE_DASH_PATTERN.replace_all(&line, "-");
    let mut line = CLOSED_SYNONYM_PATTERN
        .replace_all(&line, CLOSED_MARKER)
        .into_owned();

    for (pattern, day) in DAY_NAME_PATTERNS.iter() {
        line = pattern.replace_all(&line, *day).into_owned();
    }

    collapse_whitespace(&line)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn address_normalization_is_idempotent(text in "\\PC{0,60}") {
            let once = normalize_address(&text);
            prop_assert_eq!(normalize_address(&once), once);
        }

        #[test]
        fn phone_normalization_is_idempotent(text in "[0-9 +().-]{0,25}") {
            let once = normalize_phone_number(&text);
            prop_assert_eq!(normalize_phone_number(&once), once);
        }

        #[test]
        fn hours_normalization_is_idempotent(
            text in "((mon|tues|thu|sun|fri|monday)[ :]{0,2}([0-9]{1,2}[:.h][0-9]{2}( ?(am|pm))? ?- ?[0-9]{1,2}[:.h][0-9]{2}|closed|fermé)\n?){0,4}"
        ) {
            let once = normalize_opening_hours(&text);
            prop_assert_eq!(normalize_opening_hours(&once), once);
        }
    }
}
