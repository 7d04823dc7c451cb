//! Error types for rating updates
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Callers that need to branch on the failure class can
//! `downcast_ref::<RatingError>()` the returned error.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Failure classes of a single rating update
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    /// Precondition failure detected before any computation
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A team's aggregate variance is zero or not finite
    #[error("Degenerate variance for team {team}: sigma^2 = {sigma_sq}")]
    DegenerateVariance { team: usize, sigma_sq: f64 },

    /// An intermediate or final value became NaN or infinite
    #[error("Numeric anomaly in {stage} for team {team}")]
    NumericAnomaly { stage: &'static str, team: usize },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}
