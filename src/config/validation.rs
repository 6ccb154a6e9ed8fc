//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval bounds)
//! - Keep output lines single-line so the stdout contract holds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("interval.min_secs must be at least 1")]
    ZeroMinInterval,

    #[error("interval.min_secs ({min}) is greater than interval.max_secs ({max})")]
    InvertedInterval { min: u64, max: u64 },

    #[error("banner must not be empty")]
    EmptyBanner,

    #[error("message must not be empty")]
    EmptyMessage,

    #[error("{0} must be a single line")]
    MultilineText(&'static str),

    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let policy = &config.interval;
    if policy.min_secs == 0 {
        errors.push(ValidationError::ZeroMinInterval);
    }
    if policy.min_secs > policy.max_secs {
        errors.push(ValidationError::InvertedInterval {
            min: policy.min_secs,
            max: policy.max_secs,
        });
    }

    check_line(&config.banner, "banner", ValidationError::EmptyBanner, &mut errors);
    check_line(&config.message, "message", ValidationError::EmptyMessage, &mut errors);

    let level = config.observability.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_line(
    text: &str,
    field: &'static str,
    empty: ValidationError,
    errors: &mut Vec<ValidationError>,
) {
    if text.trim().is_empty() {
        errors.push(empty);
    } else if text.contains(['\n', '\r']) {
        errors.push(ValidationError::MultilineText(field));
    }
}
