//! Error types for the phone validator.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors reported by the numbering-plan authority.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// The text could not be tokenized into a plausible international number
    #[error("unable to parse phone number: {0}")]
    Parse(String),
}

/// Errors that can occur while reading or writing a tabular file.
#[derive(Error, Debug)]
pub enum TabularError {
    /// The file could not be opened or read
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    /// The table contents could not be parsed
    #[error("malformed {format} input: {reason}")]
    Malformed {
        format: &'static str,
        reason: String,
    },

    /// The table has no header row
    #[error("input table has no header row")]
    EmptyTable,

    /// The requested column does not exist in the table
    #[error("column {0:?} not found in input")]
    MissingColumn(String),

    /// The file extension is not a supported tabular format
    #[error("unsupported input format: {0:?} (expected csv, tsv, or xlsx)")]
    UnsupportedFormat(String),

    /// Results could not be written out
    #[error("failed to write results: {0}")]
    Write(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AuthorityError
pub type AuthorityResult<T> = Result<T, AuthorityError>;

/// Convenience type alias for Results with TabularError
pub type TabularResult<T> = Result<T, TabularError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthorityError::Parse("invalid country code".to_string());
        assert_eq!(
            err.to_string(),
            "unable to parse phone number: invalid country code"
        );

        let err = TabularError::MissingColumn("phone".to_string());
        assert_eq!(err.to_string(), "column \"phone\" not found in input");

        let err = ConfigError::InvalidValue {
            var: "PHONE_VALIDATOR_DEFAULT_REGION".to_string(),
            reason: "not a territory code".to_string(),
        };
        assert!(err.to_string().contains("PHONE_VALIDATOR_DEFAULT_REGION"));
    }

    #[test]
    fn test_tabular_error_variants() {
        let err = TabularError::Read {
            path: "numbers.csv".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("numbers.csv"));
        assert!(err.to_string().contains("permission denied"));

        let err = TabularError::UnsupportedFormat("pdf".to_string());
        assert!(err.to_string().contains("pdf"));
    }
}
