//! Plackett-Luce model
//!
//! Generalized Bradley-Terry for k >= 3 teams using a softmax over rank
//! groups. Scales linearly in the number of distinct comparisons and handles
//! ties by splitting credit across each tie group.

use crate::config::Constants;
use crate::rating::model::{default_gamma, Gamma, ModelKind, SkillModel};
use crate::types::{Rank, TeamRating, TeamUpdate};
use crate::utils::tie_counts;

#[derive(Debug, Clone, Copy)]
pub struct PlackettLuce {
    gamma: Gamma,
}

impl Default for PlackettLuce {
    fn default() -> Self {
        Self {
            gamma: default_gamma,
        }
    }
}

impl PlackettLuce {
    /// Replace the default gamma, called as `gamma(c, sigma_sq_i)`
    pub fn with_gamma(gamma: Gamma) -> Self {
        Self { gamma }
    }
}

impl SkillModel for PlackettLuce {
    fn kind(&self) -> ModelKind {
        ModelKind::PlackettLuce
    }

    fn team_updates(&self, teams: &[TeamRating], constants: &Constants) -> Vec<TeamUpdate> {
        let c = teams
            .iter()
            .map(|team| team.sigma_sq + constants.beta_sq())
            .sum::<f64>()
            .sqrt();

        // exp(mu / c) shifted by the largest exponent; the shift cancels in every quotient
        let shift = teams
            .iter()
            .map(|team| team.mu / c)
            .fold(f64::NEG_INFINITY, f64::max);
        let strengths: Vec<f64> = teams
            .iter()
            .map(|team| (team.mu / c - shift).exp())
            .collect();

        let ranks: Vec<Rank> = teams.iter().map(|team| team.rank).collect();
        let sum_q = cumulative_strengths(&ranks, &strengths);
        let a = tie_counts(&ranks);

        teams
            .iter()
            .zip(&strengths)
            .map(|(i, strength)| {
                let (omega_sum, delta_sum) = teams
                    .iter()
                    .enumerate()
                    .filter(|(_, q)| q.rank <= i.rank)
                    .fold((0.0, 0.0), |(omega, delta), (q, team_q)| {
                        let quotient = strength / sum_q[q];
                        let tie = a[q] as f64;
                        let mu = if team_q.team == i.team {
                            1.0 - quotient
                        } else {
                            -quotient
                        };

                        (omega + mu / tie, delta + quotient * (1.0 - quotient) / tie)
                    });

                let gamma = (self.gamma)(c, i.sigma_sq);
                TeamUpdate {
                    sigma_sq: i.sigma_sq,
                    omega: i.sigma_sq / c * omega_sum,
                    delta: gamma * i.sigma_sq / (c * c) * delta_sum,
                }
            })
            .collect()
    }
}

/// For each team, the total strength of all teams finishing at or below its rank
fn cumulative_strengths(ranks: &[Rank], strengths: &[f64]) -> Vec<f64> {
    ranks
        .iter()
        .map(|rank| {
            ranks
                .iter()
                .zip(strengths)
                .filter(|(other, _)| *other >= rank)
                .map(|(_, strength)| strength)
                .sum()
        })
        .collect()
}
