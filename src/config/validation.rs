//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check selector values against the built-in driver/recorder set
//! - Ensure the configured level parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::Config;
use crate::logging::Level;

/// A single semantic violation in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The level string parses as neither a named level nor `LEVEL(n)`.
    #[error("unknown log level {0:?}")]
    UnknownLevel(String),

    /// The processing selector names no built-in driver.
    #[error("unknown processing type {0:?}, expected \"text\" or \"json\"")]
    UnknownProcessing(String),

    /// The recorder selector names no built-in recorder.
    #[error("unknown recorder type {0:?}, expected \"uuid\"")]
    UnknownRecorder(String),
}

/// Check selector and level values. Reports every violation found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.log.level.is_empty() && config.log.level.parse::<Level>().is_err() {
        errors.push(ValidationError::UnknownLevel(config.log.level.clone()));
    }
    match config.log.processing.as_str() {
        "" | "text" | "json" => {}
        other => errors.push(ValidationError::UnknownProcessing(other.to_string())),
    }
    match config.transaction.recorder.as_str() {
        "" | "uuid" => {}
        other => errors.push(ValidationError::UnknownRecorder(other.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
