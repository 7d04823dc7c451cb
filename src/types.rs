//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// Finishing position of a team in one game. Lower is better, equal values tie.
pub type Rank = i64;

/// Default mean skill of a fresh player
pub const DEFAULT_MU: f64 = 25.0;

/// Default skill uncertainty of a fresh player
pub const DEFAULT_SIGMA: f64 = DEFAULT_MU / 3.0;

/// Skill belief for a single player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Conservative skill estimate `mu - z * sigma`, typically with `z = 3`
    pub fn ordinal(&self, z: f64) -> f64 {
        self.mu - z * self.sigma
    }
}

/// Aggregate skill of one team, rebuilt on every update call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRating {
    /// Sum of member means
    pub mu: f64,
    /// Sum of member variances
    pub sigma_sq: f64,
    /// Position of the team in the game
    pub team: usize,
    pub rank: Rank,
}

/// Team-level signal produced by a model and consumed by the player update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamUpdate {
    pub sigma_sq: f64,
    /// Mean-shift contribution
    pub omega: f64,
    /// Uncertainty-shrink contribution
    pub delta: f64,
}

impl TeamUpdate {
    pub(crate) fn is_finite(&self) -> bool {
        self.omega.is_finite() && self.delta.is_finite()
    }
}
