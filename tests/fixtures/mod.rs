//! Test fixtures: a caller-side entity model rated through a custom roster

#![allow(dead_code)]

use parlor_rating::{Rank, Roster};

/// A player as a game server might store it
#[derive(Debug, Clone, PartialEq)]
pub struct Gamer {
    pub id: u32,
    pub mu: f64,
    pub sigma: f64,
}

/// A team carrying its own finishing position
#[derive(Debug, Clone, PartialEq)]
pub struct Squad {
    pub name: String,
    pub placement: Rank,
    pub members: Vec<Gamer>,
}

/// Roster over [`Squad`]/[`Gamer`] that ranks squads by their placement
#[derive(Debug, Clone, Copy, Default)]
pub struct SquadRoster;

impl Roster for SquadRoster {
    type Team = Squad;
    type Player = Gamer;

    fn players<'a>(&self, team: &'a Squad) -> &'a [Gamer] {
        &team.members
    }

    fn set_players(&self, team: &mut Squad, players: Vec<Gamer>) {
        team.members = players;
    }

    fn mu(&self, player: &Gamer) -> f64 {
        player.mu
    }

    fn set_mu(&self, player: &mut Gamer, mu: f64) {
        player.mu = mu;
    }

    fn sigma(&self, player: &Gamer) -> f64 {
        player.sigma
    }

    fn set_sigma(&self, player: &mut Gamer, sigma: f64) {
        player.sigma = sigma;
    }

    fn ranks(&self, game: &[Squad]) -> Vec<Rank> {
        game.iter().map(|squad| squad.placement).collect()
    }
}

/// Build squads from `(mu, sigma)` tuples, numbering gamers in order
pub fn squads(game: &[Vec<(f64, f64)>], placements: &[Rank]) -> Vec<Squad> {
    let mut next_id = 0;
    game.iter()
        .zip(placements)
        .enumerate()
        .map(|(index, (members, &placement))| Squad {
            name: format!("squad-{}", index),
            placement,
            members: members
                .iter()
                .map(|&(mu, sigma)| {
                    next_id += 1;
                    Gamer {
                        id: next_id,
                        mu,
                        sigma,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Squads of one default-rated gamer each
pub fn solo_squads(placements: &[Rank]) -> Vec<Squad> {
    let game: Vec<Vec<(f64, f64)>> = placements
        .iter()
        .map(|_| vec![(25.0, 25.0 / 3.0)])
        .collect();
    squads(&game, placements)
}
