//! Indicator error types

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while validating or parsing indicator input.
///
/// Reversal detection itself never fails once these checks pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    #[error("insufficient history for {indicator}: {actual} bars provided, at least {required} required")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("duplicate bar timestamp: {0}")]
    DuplicateTimestamp(DateTime<Utc>),

    #[error("invalid bar at {timestamp}: {reason}")]
    InvalidBar {
        timestamp: DateTime<Utc>,
        reason: String,
    },

    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("unknown evaluation mode: {0}")]
    UnknownMode(String),
}

impl IndicatorError {
    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}
