//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject level strings the service would refuse at open
//!
//! # Design Decisions
//! - Validation is a pure function over the deserialized config
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::DiagnosticConfig;
use crate::logging::Severity;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    #[error("log destination must not be empty")]
    EmptyDestination,
}

/// Semantic checks on a deserialized config.
pub fn validate_config(config: &DiagnosticConfig) -> Result<(), ValidationError> {
    if config.level.parse::<Severity>().is_err() {
        return Err(ValidationError::InvalidLevel(config.level.clone()));
    }
    if config.file.is_empty() {
        return Err(ValidationError::EmptyDestination);
    }
    Ok(())
}
