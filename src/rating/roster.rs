//! Access to caller-owned teams and players
//!
//! The models never see a concrete entity type. A [`Roster`] tells them how to
//! read and write the two skill fields of a player, how to read and replace a
//! team's player list, and how to rank a game.

use crate::types::{Rank, Rating};
use crate::utils::positional_ranks;

/// Accessors and mutators over a caller's team and player types
pub trait Roster {
    type Team;
    type Player: Clone;

    /// Players of a team, in order
    fn players<'a>(&self, team: &'a Self::Team) -> &'a [Self::Player];

    /// Replace a team's players with their updated copies
    fn set_players(&self, team: &mut Self::Team, players: Vec<Self::Player>);

    fn mu(&self, player: &Self::Player) -> f64;

    fn set_mu(&self, player: &mut Self::Player, mu: f64);

    fn sigma(&self, player: &Self::Player) -> f64;

    fn set_sigma(&self, player: &mut Self::Player, sigma: f64);

    /// Rank of every team in a game. Defaults to finish order = input order.
    fn ranks(&self, game: &[Self::Team]) -> Vec<Rank> {
        positional_ranks(game.len())
    }
}

/// Roster for the plain representation where a team is a `Vec<Rating>`
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingRoster;

impl Roster for RatingRoster {
    type Team = Vec<Rating>;
    type Player = Rating;

    fn players<'a>(&self, team: &'a Vec<Rating>) -> &'a [Rating] {
        team
    }

    fn set_players(&self, team: &mut Vec<Rating>, players: Vec<Rating>) {
        *team = players;
    }

    fn mu(&self, player: &Rating) -> f64 {
        player.mu
    }

    fn set_mu(&self, player: &mut Rating, mu: f64) {
        player.mu = mu;
    }

    fn sigma(&self, player: &Rating) -> f64 {
        player.sigma
    }

    fn set_sigma(&self, player: &mut Rating, sigma: f64) {
        player.sigma = sigma;
    }
}

/// Roster assembled from plain functions, for callers that prefer not to
/// implement [`Roster`] on a type of their own.
pub struct FnRoster<T, P> {
    pub players: fn(&T) -> &[P],
    pub set_players: fn(&mut T, Vec<P>),
    pub mu: fn(&P) -> f64,
    pub set_mu: fn(&mut P, f64),
    pub sigma: fn(&P) -> f64,
    pub set_sigma: fn(&mut P, f64),
    /// Falls back to input order when absent
    pub ranks: Option<fn(&[T]) -> Vec<Rank>>,
}

impl<T, P: Clone> Roster for FnRoster<T, P> {
    type Team = T;
    type Player = P;

    fn players<'a>(&self, team: &'a T) -> &'a [P] {
        (self.players)(team)
    }

    fn set_players(&self, team: &mut T, players: Vec<P>) {
        (self.set_players)(team, players)
    }

    fn mu(&self, player: &P) -> f64 {
        (self.mu)(player)
    }

    fn set_mu(&self, player: &mut P, mu: f64) {
        (self.set_mu)(player, mu)
    }

    fn sigma(&self, player: &P) -> f64 {
        (self.sigma)(player)
    }

    fn set_sigma(&self, player: &mut P, sigma: f64) {
        (self.set_sigma)(player, sigma)
    }

    fn ranks(&self, game: &[T]) -> Vec<Rank> {
        match self.ranks {
            Some(ranks) => ranks(game),
            None => positional_ranks(game.len()),
        }
    }
}
