use std::collections::HashMap;
use std::sync::Mutex;

use phone_validator::domain::RegionCode;
use phone_validator::error::{AuthorityError, AuthorityResult};
use phone_validator::{NumberingPlan, TypeCode};

/// Scripted numbering plan for testing.
///
/// Provides a deterministic in-memory implementation of NumberingPlan that
/// can be configured with canned answers and tracks method calls for
/// verification. Parsing succeeds unless the text contains an alphabetic
/// character, so test inputs like "not a number" fail the way garbage does
/// against the real plan.
#[allow(dead_code)]
pub struct MockNumberingPlan {
    type_code: TypeCode,
    valid: bool,
    possible: bool,
    carrier: Option<String>,
    location: Option<String>,
    timezones: Vec<String>,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockNumberingPlan {
    /// Create a mock that parses everything digit-like as a valid,
    /// possible, fixed-line number with no carrier/location/timezone data.
    pub fn new() -> Self {
        Self {
            type_code: TypeCode::FixedLine,
            valid: true,
            possible: true,
            carrier: None,
            location: None,
            timezones: Vec::new(),
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_type(mut self, type_code: TypeCode) -> Self {
        self.type_code = type_code;
        self
    }

    pub fn with_validity(mut self, valid: bool, possible: bool) -> Self {
        self.valid = valid;
        self.possible = possible;
        self
    }

    pub fn with_carrier(mut self, carrier: &str) -> Self {
        self.carrier = Some(carrier.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_timezones(mut self, timezones: &[&str]) -> Self {
        self.timezones = timezones.iter().map(|tz| tz.to_string()).collect();
        self
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockNumberingPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberingPlan for MockNumberingPlan {
    type Number = String;

    fn parse(&self, text: &str, _region: &RegionCode) -> AuthorityResult<String> {
        self.track_call("parse");

        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(AuthorityError::Parse(format!(
                "{:?} is not a phone number",
                text
            )));
        }
        Ok(text.to_string())
    }

    fn is_valid(&self, _number: &String) -> bool {
        self.track_call("is_valid");
        self.valid
    }

    fn is_possible(&self, _number: &String) -> bool {
        self.track_call("is_possible");
        self.possible
    }

    fn type_of(&self, _number: &String) -> TypeCode {
        self.track_call("type_of");
        self.type_code
    }

    fn format_international(&self, number: &String) -> String {
        self.track_call("format_international");
        number.clone()
    }

    fn carrier_name(&self, _number: &String, _locale: &str) -> Option<String> {
        self.track_call("carrier_name");
        self.carrier.clone()
    }

    fn region_description(&self, _number: &String, _locale: &str) -> Option<String> {
        self.track_call("region_description");
        self.location.clone()
    }

    fn timezones(&self, _number: &String) -> Vec<String> {
        self.track_call("timezones");
        self.timezones.clone()
    }
}
