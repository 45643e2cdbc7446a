//! Weekly opening schedule parsed from normalized hours text
//!
//! Each of the seven days is either unknown (never mentioned), or holds the
//! hours text found for it, which may be the `closed` marker.

use crate::extractors::schedule::{days_in_line, extract_hours_from_line, WEEK};
use crate::patterns::CLOSED_MARKER;
use chrono::Weekday;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    slots: [Option<String>; 7],
}

impl WeeklySchedule {
    /// Parse normalized hours text, one schedule entry per line.
    ///
    /// A later line mentioning a day overrides an earlier one. A line with
    /// neither a digit nor `closed` stores the whole line for its days.
    pub fn parse(normalized: &str) -> Self {
        let mut schedule = Self::default();

        for line in normalized.lines() {
            let line = line.trim();
            let hours = extract_hours_from_line(line).unwrap_or(line);
            for day in days_in_line(line) {
                schedule.slots[slot_index(day)] = Some(hours.to_string());
            }
        }

        schedule
    }

    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.slots[slot_index(day)].as_deref()
    }

    pub fn is_closed(&self, day: Weekday) -> bool {
        self.get(day).is_some_and(|hours| hours.contains(CLOSED_MARKER))
    }

    pub fn mentioned_days(&self) -> Vec<Weekday> {
        WEEK.iter()
            .copied()
            .filter(|day| self.get(*day).is_some())
            .collect()
    }

    /// Compare two schedules day by day, skipping any day that is closed on
    /// either side or unknown on either side.
    pub fn compare(&self, other: &WeeklySchedule) -> ScheduleComparison {
        let mut compared = 0;

        for day in WEEK {
            if self.is_closed(day) || other.is_closed(day) {
                continue;
            }
            let (Some(ours), Some(theirs)) = (self.get(day), other.get(day)) else {
                continue;
            };

            if ours != theirs {
                return ScheduleComparison::Mismatch(day);
            }
            compared += 1;
        }

        if compared == 0 {
            ScheduleComparison::NoComparableDays
        } else {
            ScheduleComparison::Match { compared }
        }
    }
}

fn slot_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Outcome of a closing-day tolerant schedule comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleComparison {
    /// Every comparable day has the same hours on both sides
    Match { compared: usize },
    /// First day (Monday first) whose hours differ
    Mismatch(Weekday),
    /// No day had hours on both sides without one of them being closed
    NoComparableDays,
}
