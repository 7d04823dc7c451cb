//! Rating calculator
//!
//! [`Rater`] pairs a [`Roster`] with a [`SkillModel`] and the shared
//! [`Constants`]. One call rates one finished game: validate the input,
//! aggregate teams, run the model, then write the new `mu`/`sigma` back to
//! every player. Nothing is written unless every step succeeds.

use crate::config::{Constants, RatingConfig};
use crate::error::{RatingError, Result};
use crate::rating::aggregate::{team_ratings, update_player};
use crate::rating::gaussian::cdf;
use crate::rating::model::SkillModel;
use crate::rating::roster::Roster;
use crate::types::{Rank, Rating, TeamRating, TeamUpdate};
use crate::utils::positional_ranks;
use tracing::{debug, trace, warn};

/// Rater whose model is chosen at runtime from a [`RatingConfig`]
pub type DynRater<R> = Rater<R, Box<dyn SkillModel>>;

/// Applies one rating model to games made of the roster's teams
#[derive(Debug)]
pub struct Rater<R, M> {
    roster: R,
    model: M,
    constants: Constants,
}

impl<R: Roster> DynRater<R> {
    /// Create a rater for the model and constants named in `config`
    pub fn from_config(roster: R, config: &RatingConfig) -> Result<Self> {
        Rater::new(roster, config.model.build(), config.constants)
    }
}

impl<R: Roster, M: SkillModel> Rater<R, M> {
    /// Create a new rater, rejecting invalid constants
    pub fn new(roster: R, model: M, constants: Constants) -> Result<Self> {
        constants.validate()?;

        Ok(Self {
            roster,
            model,
            constants,
        })
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        let config = RatingConfig {
            model: self.model.kind(),
            constants: self.constants,
        };
        serde_json::to_value(config).unwrap_or(serde_json::Value::Null)
    }

    /// Rate a game ranked by the roster, returning the same teams in the same order
    pub fn update(&self, mut game: Vec<R::Team>) -> Result<Vec<R::Team>> {
        let ranks = self.roster.ranks(&game);
        self.update_ranked(&mut game, &ranks)?;
        Ok(game)
    }

    /// Rate a game with explicit ranks, updating players in place.
    ///
    /// On error the game is left untouched.
    pub fn update_ranked(&self, game: &mut [R::Team], ranks: &[Rank]) -> Result<()> {
        let updates = self.compute(game, ranks)?;

        let mut rated = Vec::with_capacity(game.len());
        for (index, (team, update)) in game.iter().zip(&updates).enumerate() {
            let players = self
                .roster
                .players(team)
                .iter()
                .map(|player| self.rate_player(index, player, update))
                .collect::<Result<Vec<_>>>()?;
            rated.push(players);
        }

        for (team, players) in game.iter_mut().zip(rated) {
            self.roster.set_players(team, players);
        }

        Ok(())
    }

    /// Per-team `(sigma_sq, omega, delta)` for a ranked game, without touching players
    pub fn compute(&self, game: &[R::Team], ranks: &[Rank]) -> Result<Vec<TeamUpdate>> {
        let teams = self.team_ratings(game, ranks)?;

        debug!(
            "Rating game of {} teams with {}",
            teams.len(),
            self.model.kind()
        );

        let updates = self.model.team_updates(&teams, &self.constants);
        for (index, update) in updates.iter().enumerate() {
            trace!(
                "Team {} (rank {}): omega = {}, delta = {}",
                index,
                teams[index].rank,
                update.omega,
                update.delta
            );

            if !update.is_finite() {
                warn!("Non-finite model output for team {}", index);
                return Err(RatingError::NumericAnomaly {
                    stage: "model update",
                    team: index,
                }
                .into());
            }
        }

        Ok(updates)
    }

    /// Probability of each team winning the game, summing to 1
    pub fn predict_win(&self, game: &[R::Team]) -> Result<Vec<f64>> {
        let teams = self.team_ratings(game, &positional_ranks(game.len()))?;
        if teams.len() == 1 {
            return Ok(vec![1.0]);
        }

        let n = teams.len() as f64;
        let pairs = n * (n - 1.0) / 2.0;
        let beta_sq = self.constants.beta_sq();

        let probabilities: Vec<f64> = teams
            .iter()
            .map(|a| {
                teams
                    .iter()
                    .filter(|b| b.team != a.team)
                    .map(|b| cdf((a.mu - b.mu) / (n * beta_sq + a.sigma_sq + b.sigma_sq).sqrt()))
                    .sum::<f64>()
                    / pairs
            })
            .collect();

        if let Some(index) = probabilities.iter().position(|p| !p.is_finite()) {
            warn!("Non-finite win probability for team {}", index);
            return Err(RatingError::NumericAnomaly {
                stage: "win prediction",
                team: index,
            }
            .into());
        }

        Ok(probabilities)
    }

    /// Validate the game and aggregate its teams
    fn team_ratings(&self, game: &[R::Team], ranks: &[Rank]) -> Result<Vec<TeamRating>> {
        if game.is_empty() {
            return Err(
                RatingError::invalid_input("No teams provided for rating calculation").into(),
            );
        }

        if ranks.len() != game.len() {
            return Err(RatingError::invalid_input(format!(
                "Got {} ranks for {} teams",
                ranks.len(),
                game.len()
            ))
            .into());
        }

        if let Some(index) = game
            .iter()
            .position(|team| self.roster.players(team).is_empty())
        {
            return Err(
                RatingError::invalid_input(format!("Team {} has no players", index)).into(),
            );
        }

        let teams = team_ratings(&self.roster, game, ranks);
        for team in &teams {
            if !team.sigma_sq.is_finite() || team.sigma_sq <= 0.0 {
                warn!("Team {} has degenerate variance {}", team.team, team.sigma_sq);
                return Err(RatingError::DegenerateVariance {
                    team: team.team,
                    sigma_sq: team.sigma_sq,
                }
                .into());
            }

            if !team.mu.is_finite() {
                warn!("Team {} has non-finite mean {}", team.team, team.mu);
                return Err(RatingError::NumericAnomaly {
                    stage: "team aggregation",
                    team: team.team,
                }
                .into());
            }
        }

        Ok(teams)
    }

    fn rate_player(
        &self,
        team: usize,
        player: &R::Player,
        update: &TeamUpdate,
    ) -> Result<R::Player> {
        let current = Rating::new(self.roster.mu(player), self.roster.sigma(player));
        let rated = update_player(current, update, &self.constants);

        if !rated.mu.is_finite() || !rated.sigma.is_finite() {
            warn!("Non-finite player rating in team {}", team);
            return Err(RatingError::NumericAnomaly {
                stage: "player update",
                team,
            }
            .into());
        }

        let mut player = player.clone();
        self.roster.set_mu(&mut player, rated.mu);
        self.roster.set_sigma(&mut player, rated.sigma);
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::model::ModelKind;
    use crate::rating::roster::RatingRoster;
    use crate::rating::{BradleyTerryFull, PlackettLuce, ThurstoneMostellerFull};

    const TOLERANCE: f64 = 1e-9;

    fn plackett_luce() -> Rater<RatingRoster, PlackettLuce> {
        Rater::new(RatingRoster, PlackettLuce::default(), Constants::default()).unwrap()
    }

    fn solo_game(count: usize) -> Vec<Vec<Rating>> {
        (0..count).map(|_| vec![Rating::default()]).collect()
    }

    fn error_of(result: Result<impl std::fmt::Debug>) -> RatingError {
        result
            .unwrap_err()
            .downcast::<RatingError>()
            .expect("rating error")
    }

    #[test]
    fn test_rater_creation() {
        let rater = plackett_luce();
        assert_eq!(rater.model().kind(), ModelKind::PlackettLuce);
        assert_eq!(rater.constants(), &Constants::default());

        let invalid = Constants {
            beta: -1.0,
            ..Constants::default()
        };
        assert!(Rater::new(RatingRoster, PlackettLuce::default(), invalid).is_err());
    }

    #[test]
    fn test_plackett_luce_three_players() {
        let rater = plackett_luce();
        let rated = rater.update(solo_game(3)).unwrap();

        assert!((rated[0][0].mu - 27.868_876_552_746_237).abs() < TOLERANCE);
        assert!((rated[1][0].mu - 25.717_219_138_186_557).abs() < TOLERANCE);
        assert!((rated[2][0].mu - 21.413_904_309_067_206).abs() < TOLERANCE);

        assert!((rated[0][0].sigma - 8.205_260_211_968_534).abs() < TOLERANCE);
        assert!((rated[1][0].sigma - 8.058_260_648_892_665).abs() < TOLERANCE);
        assert!((rated[2][0].sigma - 8.058_260_648_892_665).abs() < TOLERANCE);
    }

    #[test]
    fn test_bradley_terry_two_players() {
        let rater =
            Rater::new(RatingRoster, BradleyTerryFull::default(), Constants::default()).unwrap();
        let rated = rater.update(solo_game(2)).unwrap();

        assert!((rated[0][0].mu - 27.635_231_383_473_65).abs() < TOLERANCE);
        assert!((rated[1][0].mu - 22.364_768_616_526_35).abs() < TOLERANCE);
        assert!((rated[0][0].sigma - 8.065_936_807_532).abs() < TOLERANCE);
    }

    #[test]
    fn test_thurstone_mosteller_tie() {
        let rater = Rater::new(
            RatingRoster,
            ThurstoneMostellerFull::default(),
            Constants::default(),
        )
        .unwrap();

        let mut game = solo_game(2);
        rater.update_ranked(&mut game, &[0, 0]).unwrap();

        for team in &game {
            assert!((team[0].mu - 25.0).abs() < TOLERANCE);
            assert!((team[0].sigma - 7.454_043_645_204_836).abs() < 1e-8);
        }
    }

    #[test]
    fn test_mixed_team_sizes() {
        let game = vec![
            vec![Rating::new(30.0, 6.0), Rating::new(20.0, 7.0)],
            vec![Rating::default()],
            vec![
                Rating::new(28.0, 4.0),
                Rating::new(22.0, 5.0),
                Rating::new(26.0, 3.0),
            ],
        ];
        let rater = plackett_luce();

        let mut rated = game.clone();
        rater.update_ranked(&mut rated, &[1, 0, 2]).unwrap();

        let expected = [
            vec![
                (31.519_467_913_152_692, 5.934_427_290_994),
                (22.068_164_659_568_94, 6.895_235_051_208_198),
            ],
            vec![(29.190_856_002_066_294, 8.314_764_974_080_66)],
            vec![
                (26.359_107_704_611_62, 3.984_694_114_839_929),
                (19.436_105_788_455_656, 4.969_066_221_472_483),
                (25.076_998_083_844_035, 2.994_341_042_957_254_6),
            ],
        ];
        for (team, expected) in rated.iter().zip(expected.iter()) {
            assert_eq!(team.len(), expected.len());
            for (player, (mu, sigma)) in team.iter().zip(expected) {
                assert!((player.mu - mu).abs() < TOLERANCE);
                assert!((player.sigma - sigma).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_compute_exposes_team_updates() {
        let rater = plackett_luce();
        let updates = rater.compute(&solo_game(3), &[0, 1, 2]).unwrap();

        assert_eq!(updates.len(), 3);
        let total: f64 = updates.iter().map(|update| update.omega).sum();
        assert!(total.abs() < TOLERANCE);
    }

    #[test]
    fn test_invalid_inputs() {
        let rater = plackett_luce();

        // No teams
        assert!(matches!(
            error_of(rater.update(vec![])),
            RatingError::InvalidInput { .. }
        ));

        // Rank count mismatch
        let mut game = solo_game(2);
        assert!(matches!(
            error_of(rater.update_ranked(&mut game, &[0])),
            RatingError::InvalidInput { .. }
        ));

        // Empty team
        let mut game = vec![vec![Rating::default()], vec![]];
        assert!(matches!(
            error_of(rater.update_ranked(&mut game, &[0, 1])),
            RatingError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_degenerate_variance_leaves_game_untouched() {
        let rater =
            Rater::new(RatingRoster, BradleyTerryFull::default(), Constants::default()).unwrap();
        let original = vec![vec![Rating::default()], vec![Rating::new(25.0, 0.0)]];

        let mut game = original.clone();
        let err = error_of(rater.update_ranked(&mut game, &[0, 1]));
        assert_eq!(
            err,
            RatingError::DegenerateVariance {
                team: 1,
                sigma_sq: 0.0
            }
        );
        assert_eq!(game, original);
    }

    #[test]
    fn test_numeric_anomaly() {
        let rater = plackett_luce();

        let mut game = vec![
            vec![Rating::new(f64::MAX, 5.0), Rating::new(f64::MAX, 5.0)],
            vec![Rating::default()],
        ];
        let original = game.clone();
        assert!(matches!(
            error_of(rater.update_ranked(&mut game, &[0, 1])),
            RatingError::NumericAnomaly {
                stage: "team aggregation",
                team: 0
            }
        ));
        assert_eq!(game, original);

        let mut game = vec![vec![Rating::new(f64::NAN, 5.0)], vec![Rating::default()]];
        assert!(matches!(
            error_of(rater.update_ranked(&mut game, &[0, 1])),
            RatingError::NumericAnomaly { .. }
        ));
    }

    #[test]
    fn test_single_team_game() {
        let rater = Rater::new(
            RatingRoster,
            ThurstoneMostellerFull::default(),
            Constants::default().without_dynamics(),
        )
        .unwrap();

        let rated = rater.update(solo_game(1)).unwrap();
        assert_eq!(rated, solo_game(1));
    }

    #[test]
    fn test_predict_win() {
        let rater = plackett_luce();

        let even = rater.predict_win(&solo_game(4)).unwrap();
        for probability in &even {
            assert!((probability - 0.25).abs() < TOLERANCE);
        }

        let game = vec![
            vec![Rating::new(35.0, 4.0)],
            vec![Rating::new(25.0, 4.0)],
            vec![Rating::new(15.0, 4.0)],
        ];
        let probabilities = rater.predict_win(&game).unwrap();
        assert!(probabilities[0] > probabilities[1]);
        assert!(probabilities[1] > probabilities[2]);
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < TOLERANCE);

        assert_eq!(rater.predict_win(&solo_game(1)).unwrap(), vec![1.0]);
        assert!(rater.predict_win(&[]).is_err());
    }

    #[test]
    fn test_from_config_and_report() {
        let config = RatingConfig {
            model: ModelKind::ThurstoneMostellerFull,
            constants: Constants::default(),
        };
        let rater = Rater::from_config(RatingRoster, &config).unwrap();
        assert_eq!(rater.model().kind(), ModelKind::ThurstoneMostellerFull);

        let reported = rater.config();
        assert_eq!(reported["model"], "thurstone_mosteller_full");
        assert_eq!(reported["constants"]["kappa"], 0.0001);

        let round_trip = RatingConfig::from_json(reported).unwrap();
        assert_eq!(round_trip, config);
    }
}
