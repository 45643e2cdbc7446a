// Line-level extraction for opening hours
use crate::patterns::HOURS_START_PATTERN;
use chrono::Weekday;

/// Days in schedule order, Monday first
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Canonical day name as produced by hours normalization
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Days whose canonical name occurs in the line
pub fn days_in_line(line: &str) -> Vec<Weekday> {
    WEEK.iter()
        .copied()
        .filter(|day| line.contains(day_name(*day)))
        .collect()
}

/// Hours part of a line: everything from the first digit or `closed` on
pub fn extract_hours_from_line(line: &str) -> Option<&str> {
    HOURS_START_PATTERN
        .find(line)
        .map(|m| line[m.start()..].trim())
}
