//! Error types for roll rotation solving.

use thiserror::Error;

/// Result type alias for roll operations.
pub type RollResult<T> = Result<T, RollError>;

/// Errors that can occur while solving a rolling rotation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RollError {
    /// A scalar parameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// A vector that must carry a direction has (near) zero length.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl RollError {
    /// Create an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Create a degenerate input error.
    #[must_use]
    pub fn degenerate(details: impl Into<String>) -> Self {
        Self::DegenerateInput(details.into())
    }
}
