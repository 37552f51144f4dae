//! Per-record validation.

use tracing::{debug, warn};

use super::classifier;
use super::normalizer;
use crate::authority::NumberingPlan;
use crate::domain::RegionCode;
use crate::models::{RecordOutcome, ValidationReport, UNKNOWN};

/// Composes normalization, parsing, validity checks, classification, and
/// metadata lookups into a single per-record operation.
///
/// Every failure is converted into [`RecordOutcome::Failure`]; nothing
/// panics and no error escapes this boundary. That guarantee is what lets
/// a batch keep going past bad rows.
pub struct RecordValidator<A: NumberingPlan> {
    authority: A,
    locale: String,
}

impl<A: NumberingPlan> RecordValidator<A> {
    /// Create a validator around an authority, with the locale used for
    /// carrier and geographic lookups.
    pub fn new(authority: A, locale: impl Into<String>) -> Self {
        Self {
            authority,
            locale: locale.into(),
        }
    }

    /// The authority this validator delegates to.
    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// Validate one raw input against the numbering plan.
    ///
    /// `region` is the fallback country hint for national-format digits;
    /// the country-code repair heuristic itself does not consult it (see
    /// [`normalizer::normalize`]).
    pub fn validate_record(&self, raw: &str, region: &RegionCode) -> RecordOutcome {
        let normalized = normalizer::normalize(raw);

        let parsed = match self.authority.parse(&normalized, region) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    input = raw,
                    normalized = normalized.as_str(),
                    region = region.as_str(),
                    error = %e,
                    "record failed to parse"
                );
                return RecordOutcome::Failure {
                    error: e.to_string(),
                };
            }
        };
        debug!(
            input = raw,
            normalized = normalized.as_str(),
            region = region.as_str(),
            parsed = ?parsed,
            "parsed record"
        );

        let is_valid = self.authority.is_valid(&parsed);
        let is_possible = self.authority.is_possible(&parsed);

        let code = self.authority.type_of(&parsed);
        let line_type = classifier::classify(&self.authority, code, &parsed, &self.locale);

        let carrier = self
            .authority
            .carrier_name(&parsed, &self.locale)
            .unwrap_or_else(|| UNKNOWN.to_string());
        let location = self
            .authority
            .region_description(&parsed, &self.locale)
            .unwrap_or_else(|| UNKNOWN.to_string());
        let zones = self.authority.timezones(&parsed);
        let timezone = if zones.is_empty() {
            UNKNOWN.to_string()
        } else {
            zones.join(", ")
        };

        RecordOutcome::Report(ValidationReport {
            formatted_number: self.authority.format_international(&parsed),
            is_valid,
            is_possible,
            line_type: line_type.label(),
            carrier,
            location,
            timezone,
        })
    }
}
