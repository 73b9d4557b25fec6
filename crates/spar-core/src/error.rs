//! Centralized error types for SPAR.

use thiserror::Error;

/// Main error type for estimation operations.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("Invalid risk model: {0}")]
    InvalidModel(String),

    #[error("Date out of range: cannot advance {days} day(s)")]
    DateOutOfRange { days: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

impl EstimateError {
    /// Create an invalid parameter error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by caller input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::InvalidModel(_))
    }
}
