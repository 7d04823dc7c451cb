//! Team aggregation and the shared player update
//!
//! Teams are reduced to `(sum of mu, sum of sigma^2)` before any model runs,
//! and each model's per-team signal is pushed back down to the players in
//! proportion to their share of the team's variance.

use crate::config::Constants;
use crate::rating::roster::Roster;
use crate::types::{Rank, Rating, TeamRating, TeamUpdate};

/// One aggregate per team, in input order
pub fn team_ratings<R: Roster>(roster: &R, game: &[R::Team], ranks: &[Rank]) -> Vec<TeamRating> {
    game.iter()
        .zip(ranks)
        .enumerate()
        .map(|(index, (team, &rank))| {
            let players = roster.players(team);
            TeamRating {
                mu: players.iter().map(|player| roster.mu(player)).sum(),
                sigma_sq: players
                    .iter()
                    .map(|player| roster.sigma(player).powi(2))
                    .sum(),
                team: index,
                rank,
            }
        })
        .collect()
}

/// New rating for one member of a team that received `update`
pub fn update_player(rating: Rating, update: &TeamUpdate, constants: &Constants) -> Rating {
    let sigma_sq = rating.sigma * rating.sigma;
    let share = sigma_sq / update.sigma_sq;

    let mu = rating.mu + share * update.omega;
    let mut sigma = rating.sigma * (1.0 - share * update.delta).max(constants.kappa).sqrt();
    if constants.tau > 0.0 {
        sigma = (sigma * sigma + constants.tau * constants.tau).sqrt();
    }

    Rating { mu, sigma }
}
