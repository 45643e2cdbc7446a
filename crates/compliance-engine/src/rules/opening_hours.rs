// Store opening hours equivalence between brand and retailer sites
use crate::normalize::normalize_opening_hours;
use crate::rules::{both_present, log_verdict, missing_info, FactComplianceChecker};
use crate::schedule::{ScheduleComparison, WeeklySchedule};
use shared_types::{ComplianceVerdict, FactKind, ReasonCode};

/// Decide whether two published weekly schedules agree.
///
/// Days marked closed on either side are not compared: retailer pages often
/// leave closed days out while the brand page lists them.
pub fn check_opening_hours(brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
    let Some((brand, retailer)) = both_present(brand, retailer) else {
        return missing_info(FactKind::OpeningHours);
    };

    let brand = normalize_opening_hours(brand);
    let retailer = normalize_opening_hours(retailer);
    tracing::debug!(%brand, %retailer, "Normalized opening hours");

    if brand == retailer {
        return log_verdict(
            FactKind::OpeningHours,
            ComplianceVerdict::compliant(ReasonCode::ExactMatch),
        );
    }

    let brand_schedule = WeeklySchedule::parse(&brand);
    let retailer_schedule = WeeklySchedule::parse(&retailer);

    let verdict = match brand_schedule.compare(&retailer_schedule) {
        ScheduleComparison::Match { compared } => {
            tracing::debug!(compared, "All comparable days match");
            ComplianceVerdict::compliant(ReasonCode::ClosingDaysOmitted)
        }
        // Vacuously compliant; kept distinct so it can be reviewed
        ScheduleComparison::NoComparableDays => {
            ComplianceVerdict::compliant(ReasonCode::NoComparableDays)
        }
        ScheduleComparison::Mismatch(day) => {
            tracing::debug!(
                day = %day,
                brand = brand_schedule.get(day).unwrap_or_default(),
                retailer = retailer_schedule.get(day).unwrap_or_default(),
                "Opening hours differ"
            );
            ComplianceVerdict::non_compliant(ReasonCode::DayHoursMismatch)
        }
    };
    log_verdict(FactKind::OpeningHours, verdict)
}

/// Boolean form of [`check_opening_hours`]
pub fn is_opening_hours_compliant(brand: Option<&str>, retailer: Option<&str>) -> bool {
    check_opening_hours(brand, retailer).is_compliant
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningHoursChecker;

impl FactComplianceChecker for OpeningHoursChecker {
    fn kind(&self) -> FactKind {
        FactKind::OpeningHours
    }

    fn check(&self, brand: Option<&str>, retailer: Option<&str>) -> ComplianceVerdict {
        check_opening_hours(brand, retailer)
    }
}
