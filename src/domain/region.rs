//! RegionCode value object.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for ISO 3166-1 alpha-2 territory codes.
///
/// The region code is the fallback country hint handed to the numbering-plan
/// authority when a number lacks an explicit country calling code. Input is
/// normalized to uppercase at construction time.
///
/// # Example
///
/// ```
/// use phone_validator::domain::RegionCode;
///
/// let region = RegionCode::new("gb").unwrap();
/// assert_eq!(region.as_str(), "GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Territory codes advertised to interactive callers as selector
    /// choices. Codes outside this list are still accepted and passed
    /// through to the authority uninterpreted.
    pub const SUPPORTED: &'static [&'static str] = &[
        "US", "GB", "CA", "AU", "IN", "DE", "FR", "IT", "ES", "BR", "MX", "JP", "KR", "CN",
    ];

    /// Create a new RegionCode, validating and normalizing the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly two characters after trimming
    /// - Both characters must be ASCII letters (normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRegion` if the code is malformed.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let normalized = code.trim().to_ascii_uppercase();

        if normalized.len() != 2 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidRegion(code));
        }

        Ok(Self(normalized))
    }

    /// The default region used when the caller supplies none.
    pub fn united_states() -> Self {
        Self("US".to_string())
    }

    /// Get the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code is on the advertised selector list.
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(&self.0.as_str())
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::united_states()
    }
}

impl FromStr for RegionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
