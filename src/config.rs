//! Configuration management for the phone validator.
//!
//! This module handles loading and validating configuration from environment
//! variables. These are defaults only; CLI flags override them per
//! invocation.

use crate::domain::RegionCode;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the phone validator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback territory for numbers without an explicit country code
    pub default_region: RegionCode,

    /// Locale for carrier and geographic descriptions (default: "en")
    pub locale: String,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_VALIDATOR_DEFAULT_REGION`: fallback territory code (default: US)
    /// - `PHONE_VALIDATOR_LOCALE`: lookup locale (default: en)
    /// - `LOG_LEVEL`: logging level (default: info)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_region = match env::var("PHONE_VALIDATOR_DEFAULT_REGION") {
            Ok(value) => RegionCode::new(value.as_str()).map_err(|e| ConfigError::InvalidValue {
                var: "PHONE_VALIDATOR_DEFAULT_REGION".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => RegionCode::default(),
        };

        let locale = env::var("PHONE_VALIDATOR_LOCALE").unwrap_or_else(|_| "en".to_string());

        if locale.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_VALIDATOR_LOCALE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            default_region,
            locale,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: RegionCode::default(),
            locale: "en".to_string(),
            log_level: "info".to_string(),
        }
    }
}
