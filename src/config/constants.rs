//! Tunable model constants
//!
//! One bundle is shared by all three models. Values are validated once when a
//! rater is built and are immutable afterwards.

use crate::error::{RatingError, Result};
use crate::types::{DEFAULT_MU, DEFAULT_SIGMA};
use serde::{Deserialize, Serialize};

/// Parameters shared by every rating model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    /// Skill-class width
    pub beta: f64,
    /// Dynamics noise added back to sigma after each update
    pub tau: f64,
    /// Lower bound on the variance shrink factor
    pub kappa: f64,
    /// Draw margin
    pub epsilon: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self::for_scale(DEFAULT_MU, DEFAULT_SIGMA)
    }
}

impl Constants {
    /// Derive constants for a rating scale with the given starting `mu` and `sigma`
    pub fn for_scale(mu: f64, sigma: f64) -> Self {
        Self {
            beta: sigma / 2.0,
            tau: mu / 300.0,
            kappa: 0.0001,
            epsilon: 0.1,
        }
    }

    /// Same constants without dynamics noise
    pub fn without_dynamics(self) -> Self {
        Self { tau: 0.0, ..self }
    }

    pub fn beta_sq(&self) -> f64 {
        self.beta * self.beta
    }

    pub fn two_beta_sq(&self) -> f64 {
        2.0 * self.beta_sq()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("beta", self.beta),
            ("tau", self.tau),
            ("kappa", self.kappa),
            ("epsilon", self.epsilon),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RatingError::configuration(format!("{} must be finite", name)).into());
        }

        if self.beta <= 0.0 {
            return Err(RatingError::configuration("Beta must be positive").into());
        }

        if self.tau < 0.0 {
            return Err(RatingError::configuration("Tau must be non-negative").into());
        }

        if self.kappa <= 0.0 || self.kappa > 1.0 {
            return Err(RatingError::configuration("Kappa must be in (0, 1]").into());
        }

        if self.epsilon < 0.0 {
            return Err(RatingError::configuration("Epsilon must be non-negative").into());
        }

        Ok(())
    }
}
