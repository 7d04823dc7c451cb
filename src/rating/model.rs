//! Model capability shared by the three rating models

use crate::config::Constants;
use crate::rating::{BradleyTerryFull, PlackettLuce, ThurstoneMostellerFull};
use crate::types::{TeamRating, TeamUpdate};
use serde::{Deserialize, Serialize};

/// Weighting of a team's delta, called with a normalizer `c` and a
/// model-specific second argument (team variance, or team count for
/// Thurstone-Mosteller).
pub type Gamma = fn(f64, f64) -> f64;

/// `sqrt(sigma_sq) / c`: shrink in proportion to the team's share of the margin
pub fn default_gamma(c: f64, sigma_sq: f64) -> f64 {
    sigma_sq.sqrt() / c
}

/// `1 / k` for a game of `k` teams
pub fn reciprocal_team_count(_c: f64, team_count: f64) -> f64 {
    1.0 / team_count
}

/// A rating model turns team aggregates into per-team `(omega, delta)` signals
pub trait SkillModel: Send + Sync {
    /// Which model this is
    fn kind(&self) -> ModelKind;

    /// Compute one update per team, in input order
    fn team_updates(&self, teams: &[TeamRating], constants: &Constants) -> Vec<TeamUpdate>;
}

impl<M: SkillModel + ?Sized> SkillModel for Box<M> {
    fn kind(&self) -> ModelKind {
        (**self).kind()
    }

    fn team_updates(&self, teams: &[TeamRating], constants: &Constants) -> Vec<TeamUpdate> {
        (**self).team_updates(teams, constants)
    }
}

/// The closed set of available models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    BradleyTerryFull,
    #[default]
    PlackettLuce,
    ThurstoneMostellerFull,
}

impl ModelKind {
    /// Build the model with its default gamma
    pub fn build(self) -> Box<dyn SkillModel> {
        match self {
            ModelKind::BradleyTerryFull => Box::new(BradleyTerryFull::default()),
            ModelKind::PlackettLuce => Box::new(PlackettLuce::default()),
            ModelKind::ThurstoneMostellerFull => Box::new(ThurstoneMostellerFull::default()),
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::BradleyTerryFull => write!(f, "BradleyTerryFull"),
            ModelKind::PlackettLuce => write!(f, "PlackettLuce"),
            ModelKind::ThurstoneMostellerFull => write!(f, "ThurstoneMostellerFull"),
        }
    }
}
