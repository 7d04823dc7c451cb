//! Bradley-Terry (full pairing) model
//!
//! Logistic skill model in the spirit of Glicko. Every team is compared with
//! every team holding a different rank; tied teams do not influence each other.

use crate::config::Constants;
use crate::rating::model::{default_gamma, Gamma, ModelKind, SkillModel};
use crate::types::{Rank, TeamRating, TeamUpdate};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
pub struct BradleyTerryFull {
    gamma: Gamma,
}

impl Default for BradleyTerryFull {
    fn default() -> Self {
        Self {
            gamma: default_gamma,
        }
    }
}

impl BradleyTerryFull {
    /// Replace the default gamma, called as `gamma(c_iq, sigma_sq_i)`
    pub fn with_gamma(gamma: Gamma) -> Self {
        Self { gamma }
    }
}

impl SkillModel for BradleyTerryFull {
    fn kind(&self) -> ModelKind {
        ModelKind::BradleyTerryFull
    }

    fn team_updates(&self, teams: &[TeamRating], constants: &Constants) -> Vec<TeamUpdate> {
        let two_beta_sq = constants.two_beta_sq();

        teams
            .iter()
            .map(|i| {
                let (omega, delta) = teams
                    .iter()
                    .filter(|q| q.rank != i.rank)
                    .fold((0.0, 0.0), |(omega, delta), q| {
                        let ciq = (i.sigma_sq + q.sigma_sq + two_beta_sq).sqrt();
                        let piq = 1.0 / (1.0 + ((q.mu - i.mu) / ciq).exp());
                        let sigma_sq_to_ciq = i.sigma_sq / ciq;
                        let gamma = (self.gamma)(ciq, i.sigma_sq);

                        (
                            omega + sigma_sq_to_ciq * (score(q.rank, i.rank) - piq),
                            delta + gamma * sigma_sq_to_ciq / ciq * piq * (1.0 - piq),
                        )
                    });

                TeamUpdate {
                    sigma_sq: i.sigma_sq,
                    omega,
                    delta,
                }
            })
            .collect()
    }
}

/// Observed score of `i` against `q`
fn score(q: Rank, i: Rank) -> f64 {
    match q.cmp(&i) {
        Ordering::Less => 0.0,
        Ordering::Greater => 1.0,
        Ordering::Equal => 0.5,
    }
}
