//! Thurstone-Mosteller (full pairing) model
//!
//! Gaussian analogue of Bradley-Terry, similar to TrueSkill. Gaussian CDF/PDF
//! implementations differ from system to system, so results drift slightly
//! between libraries. Tuning gamma can improve the accuracy of this model.

use crate::config::Constants;
use crate::rating::gaussian::{v, vt, w, wt};
use crate::rating::model::{reciprocal_team_count, Gamma, ModelKind, SkillModel};
use crate::types::{TeamRating, TeamUpdate};

#[derive(Debug, Clone, Copy)]
pub struct ThurstoneMostellerFull {
    gamma: Gamma,
}

impl Default for ThurstoneMostellerFull {
    fn default() -> Self {
        Self {
            gamma: reciprocal_team_count,
        }
    }
}

impl ThurstoneMostellerFull {
    /// Replace the default gamma, called as `gamma(c_iq, team_count)`
    pub fn with_gamma(gamma: Gamma) -> Self {
        Self { gamma }
    }
}

impl SkillModel for ThurstoneMostellerFull {
    fn kind(&self) -> ModelKind {
        ModelKind::ThurstoneMostellerFull
    }

    fn team_updates(&self, teams: &[TeamRating], constants: &Constants) -> Vec<TeamUpdate> {
        let two_beta_sq = constants.two_beta_sq();
        let team_count = teams.len() as f64;

        teams
            .iter()
            .map(|i| {
                let (omega, delta) = teams
                    .iter()
                    .filter(|q| q.team != i.team)
                    .fold((0.0, 0.0), |(omega, delta), q| {
                        let ciq = (i.sigma_sq + q.sigma_sq + two_beta_sq).sqrt();
                        let delta_mu = (i.mu - q.mu) / ciq;
                        let sigma_sq_to_ciq = i.sigma_sq / ciq;
                        let gamma = (self.gamma)(ciq, team_count);
                        let margin = constants.epsilon / ciq;

                        if q.rank == i.rank {
                            (
                                omega + sigma_sq_to_ciq * vt(delta_mu, margin),
                                delta + gamma * sigma_sq_to_ciq / ciq * wt(delta_mu, margin),
                            )
                        } else {
                            let sign = if q.rank > i.rank { 1.0 } else { -1.0 };
                            (
                                omega + sign * sigma_sq_to_ciq * v(sign * delta_mu, margin),
                                delta
                                    + gamma * sigma_sq_to_ciq / ciq * w(sign * delta_mu, margin),
                            )
                        }
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
