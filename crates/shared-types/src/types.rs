use std::fmt;

/// The kind of store fact published on both the brand and the retailer site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    Address,
    PhoneNumber,
    OpeningHours,
}

impl FactKind {
    /// All fact kinds, in the order a store report lists them
    pub const ALL: [FactKind; 3] = [
        FactKind::Address,
        FactKind::PhoneNumber,
        FactKind::OpeningHours,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FactKind::Address => "Address",
            FactKind::PhoneNumber => "Phone",
            FactKind::OpeningHours => "Hours",
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule of a checker's decision pipeline produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    // Shared
    MissingInfo,
    ExactMatch,
    GenericMismatch,
    // Address
    FormatDifferenceOnly,
    MissingComponents,
    StreetMismatch,
    PostalCodeMismatch,
    ShoppingCentreMismatch,
    // Phone number
    CountryCodeDifference,
    NumberMismatch,
    // Opening hours
    ClosingDaysOmitted,
    NoComparableDays,
    DayHoursMismatch,
}

impl ReasonCode {
    /// Wire name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::MissingInfo => "MISSING_INFO",
            ReasonCode::ExactMatch => "EXACT_MATCH",
            ReasonCode::GenericMismatch => "GENERIC_MISMATCH",
            ReasonCode::FormatDifferenceOnly => "FORMAT_DIFFERENCE_ONLY",
            ReasonCode::MissingComponents => "MISSING_COMPONENTS",
            ReasonCode::StreetMismatch => "STREET_MISMATCH",
            ReasonCode::PostalCodeMismatch => "POSTAL_CODE_MISMATCH",
            ReasonCode::ShoppingCentreMismatch => "SHOPPING_CENTRE_MISMATCH",
            ReasonCode::CountryCodeDifference => "COUNTRY_CODE_DIFFERENCE",
            ReasonCode::NumberMismatch => "NUMBER_MISMATCH",
            ReasonCode::ClosingDaysOmitted => "CLOSING_DAYS_OMITTED",
            ReasonCode::NoComparableDays => "NO_COMPARABLE_DAYS",
            ReasonCode::DayHoursMismatch => "DAY_HOURS_MISMATCH",
        }
    }

    /// Whether this reason accompanies a compliant verdict
    pub fn is_compliant_reason(&self) -> bool {
        matches!(
            self,
            ReasonCode::ExactMatch
                | ReasonCode::FormatDifferenceOnly
                | ReasonCode::CountryCodeDifference
                | ReasonCode::ClosingDaysOmitted
                | ReasonCode::NoComparableDays
        )
    }

    /// One-line explanation for reports
    pub fn description(&self) -> &'static str {
        match self {
            ReasonCode::MissingInfo => "information is missing on at least one site",
            ReasonCode::ExactMatch => "values match exactly after normalization",
            ReasonCode::GenericMismatch => "values do not match the required criteria",
            ReasonCode::FormatDifferenceOnly => "values differ only in formatting",
            ReasonCode::MissingComponents => "essential address components are missing",
            ReasonCode::StreetMismatch => "street name mismatch",
            ReasonCode::PostalCodeMismatch => "postal code mismatch or missing",
            ReasonCode::ShoppingCentreMismatch => "shopping centre name inconsistency",
            ReasonCode::CountryCodeDifference => "numbers differ only by country code",
            ReasonCode::NumberMismatch => "different phone numbers",
            ReasonCode::ClosingDaysOmitted => {
                "hours match once closing days listed on one side are ignored"
            }
            ReasonCode::NoComparableDays => "no day could be compared on both sites",
            ReasonCode::DayHoursMismatch => "different opening hours on at least one day",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing two textual representations of one fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceVerdict {
    pub is_compliant: bool,
    pub reason: ReasonCode,
}

impl ComplianceVerdict {
    pub fn compliant(reason: ReasonCode) -> Self {
        Self {
            is_compliant: true,
            reason,
        }
    }

    pub fn non_compliant(reason: ReasonCode) -> Self {
        Self {
            is_compliant: false,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FactCheckResult {
    pub kind: FactKind,
    pub verdict: ComplianceVerdict,
    pub brand_value: Option<String>,    // Raw text as fetched
    pub retailer_value: Option<String>, // None when the element was not found
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoreComplianceReport {
    pub store: String,
    pub results: Vec<FactCheckResult>,
    pub checked_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl StoreComplianceReport {
    pub fn is_fully_compliant(&self) -> bool {
        self.results.iter().all(|r| r.verdict.is_compliant)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FactCheckResult> {
        self.results.iter().filter(|r| !r.verdict.is_compliant)
    }

    pub fn result_for(&self, kind: FactKind) -> Option<&FactCheckResult> {
        self.results.iter().find(|r| r.kind == kind)
    }

    pub fn summary(&self) -> ComplianceSummary {
        let passed = self
            .results
            .iter()
            .filter(|r| r.verdict.is_compliant)
            .count();
        ComplianceSummary {
            total: self.results.len(),
            passed,
            failed: self.results.len() - passed,
        }
    }
}
