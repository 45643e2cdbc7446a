//! Policy constants and compiled patterns shared by the fact checkers
//!
//! The numeric thresholds are policy: changing them silently changes which
//! brand/retailer pairs are accepted.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum token overlap (exclusive) for two addresses to be treated as the same text
pub const TOKEN_OVERLAP_THRESHOLD: f64 = 0.70;

/// Numbers with at most this many digits are assumed to carry no country code
pub const LOCAL_NUMBER_MAX_DIGITS: usize = 8;

/// Digits dropped from the front of a longer number as its country code
pub const COUNTRY_CODE_DIGITS: usize = 3;

/// International dialing prefix stripped before the country code
pub const INTERNATIONAL_PREFIX: &str = "00";

/// Marks a day on which the store does not open
pub const CLOSED_MARKER: &str = "closed";

/// Words that flag an address as located inside a shopping centre
pub const SHOPPING_CENTRE_KEYWORDS: &[&str] = &["centre", "center", "mall"];

/// Closure words from other languages, canonicalized to [`CLOSED_MARKER`]
pub const CLOSED_SYNONYMS: &[&str] = &["fermé", "ferme", "geschlossen"];

lazy_static! {
    /// First standalone 5-digit group (postal code)
    pub static ref POSTAL_CODE_PATTERN: Regex = Regex::new(r"\b[0-9]{5}\b").unwrap();

    /// street name, then number, then locality
    pub static ref ADDRESS_SHAPE_PATTERN: Regex = Regex::new(r"[a-zA-Z].*[0-9].*[a-zA-Z]").unwrap();

    /// number, then street/locality, then postal code
    pub static ref NUMBER_FIRST_ADDRESS_SHAPE_PATTERN: Regex =
        Regex::new(r"[0-9].*[a-zA-Z].*[0-9]").unwrap();

    /// Address token delimiters
    pub static ref TOKEN_DELIMITER_PATTERN: Regex = Regex::new(r"[,\s]+").unwrap();

    /// `:`, `.` or `,` used as a time separator
    pub static ref TIME_SEPARATOR_PATTERN: Regex = Regex::new(r"[:.,]([0-9])").unwrap();

    /// Leading zero on an hour (`09h00`)
    pub static ref ZERO_PADDED_HOUR_PATTERN: Regex = Regex::new(r"\b0([0-9])h").unwrap();

    /// am/pm after a time, possibly repeated
    pub static ref MERIDIEM_PATTERN: Regex = Regex::new(r"([0-9])(?:\s*(?:am|pm)\b)+").unwrap();

    /// Dash between two times or two days, with surrounding spaces
    pub static ref RANGE_DASH_PATTERN: Regex = Regex::new(r"\s*[-–—]\s*").unwrap();

    /// Start of the hours part of a schedule line
    pub static ref HOURS_START_PATTERN: Regex = Regex::new(r"[0-9]|closed").unwrap();

    pub static ref CLOSED_SYNONYM_PATTERN: Regex =
        Regex::new(&format!(r"\b(?:{})\b", CLOSED_SYNONYMS.join("|"))).unwrap();

    /// Day names and their abbreviations, longest form first
    pub static ref DAY_NAME_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(?:monday|mon)\b").unwrap(), "monday"),
        (Regex::new(r"\b(?:tuesday|tues|tue)\b").unwrap(), "tuesday"),
        (Regex::new(r"\b(?:wednesday|wed)\b").unwrap(), "wednesday"),
        (Regex::new(r"\b(?:thursday|thurs|thur|thu)\b").unwrap(), "thursday"),
        (Regex::new(r"\b(?:friday|fri)\b").unwrap(), "friday"),
        (Regex::new(r"\b(?:saturday|sat)\b").unwrap(), "saturday"),
        (Regex::new(r"\b(?:sunday|sun)\b").unwrap(), "sunday"),
    ];
}
