//! Validation outcome models.

use serde::Serialize;

/// Sentinel for metadata the authority has no data for. Absence of carrier,
/// location, or timezone information is data, not an error.
pub const UNKNOWN: &str = "Unknown";

/// Successful validation of a single number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// International display form
    pub formatted_number: String,

    /// Whether the number matches an assigned numbering-plan range
    pub is_valid: bool,

    /// Whether the number is structurally plausible for its region
    pub is_possible: bool,

    /// Display label of the classified line type
    pub line_type: String,

    /// Carrier name, or [`UNKNOWN`]
    pub carrier: String,

    /// Geographic description, or [`UNKNOWN`]
    pub location: String,

    /// Comma-joined IANA-style zone names, or [`UNKNOWN`]
    pub timezone: String,
}

/// Outcome of validating one record: either a full report or the failure
/// reason. The error channel is part of the type signature rather than an
/// optional field on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordOutcome {
    Report(ValidationReport),
    Failure { error: String },
}

impl RecordOutcome {
    /// Whether this outcome carries an error instead of a report.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The success report, if any.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Failure { .. } => None,
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// One row of a batch result, keeping the untouched raw input alongside its
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    /// The raw input value, preserved verbatim
    pub original: String,

    /// What the validator made of it
    pub outcome: RecordOutcome,
}

/// Flat export row with the exact column set of the results table. Success
/// rows leave `error` empty; failed rows leave the success columns empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub original_number: String,
    pub formatted_number: Option<String>,
    pub is_valid: Option<bool>,
    pub is_possible: Option<bool>,
    pub line_type: Option<String>,
    pub carrier: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub error: Option<String>,
}

impl From<&BatchRecord> for ResultRow {
    fn from(record: &BatchRecord) -> Self {
        match &record.outcome {
            RecordOutcome::Report(report) => ResultRow {
                original_number: record.original.clone(),
                formatted_number: Some(report.formatted_number.clone()),
                is_valid: Some(report.is_valid),
                is_possible: Some(report.is_possible),
                line_type: Some(report.line_type.clone()),
                carrier: Some(report.carrier.clone()),
                location: Some(report.location.clone()),
                timezone: Some(report.timezone.clone()),
                error: None,
            },
            RecordOutcome::Failure { error } => ResultRow {
                original_number: record.original.clone(),
                formatted_number: None,
                is_valid: None,
                is_possible: None,
                line_type: None,
                carrier: None,
                location: None,
                timezone: None,
                error: Some(error.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ValidationReport {
        ValidationReport {
            formatted_number: "+1 202-555-0123".to_string(),
            is_valid: true,
            is_possible: true,
            line_type: "Fixed Line or Mobile".to_string(),
            carrier: UNKNOWN.to_string(),
            location: "US".to_string(),
            timezone: UNKNOWN.to_string(),
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let success = RecordOutcome::Report(sample_report());
        assert!(!success.is_failure());
        assert!(success.report().is_some());
        assert!(success.error().is_none());

        let failure = RecordOutcome::Failure {
            error: "unable to parse phone number".to_string(),
        };
        assert!(failure.is_failure());
        assert!(failure.report().is_none());
        assert_eq!(failure.error(), Some("unable to parse phone number"));
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let success = RecordOutcome::Report(sample_report());
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["formatted_number"], "+1 202-555-0123");
        assert_eq!(json["is_valid"], true);
        assert!(json.get("error").is_none());

        let failure = RecordOutcome::Failure {
            error: "bad input".to_string(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["error"], "bad input");
        assert!(json.get("formatted_number").is_none());
    }

    #[test]
    fn test_result_row_from_success() {
        let record = BatchRecord {
            original: "2025550123".to_string(),
            outcome: RecordOutcome::Report(sample_report()),
        };
        let row = ResultRow::from(&record);
        assert_eq!(row.original_number, "2025550123");
        assert_eq!(row.formatted_number.as_deref(), Some("+1 202-555-0123"));
        assert_eq!(row.is_valid, Some(true));
        assert_eq!(row.error, None);
    }

    #[test]
    fn test_result_row_from_failure() {
        let record = BatchRecord {
            original: "not a number".to_string(),
            outcome: RecordOutcome::Failure {
                error: "unable to parse phone number".to_string(),
            },
        };
        let row = ResultRow::from(&record);
        assert_eq!(row.original_number, "not a number");
        assert_eq!(row.formatted_number, None);
        assert_eq!(row.is_valid, None);
        assert!(row.error.unwrap().contains("unable to parse"));
    }
}
