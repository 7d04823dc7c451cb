//! Bayesian approximation rating models (Weng-Lin / OpenSkill family)
//!
//! This module provides the team aggregation step, the three rating models,
//! the shared player update and the calculator that ties them to caller-owned
//! entities through a [`Roster`].

pub mod aggregate;
pub mod bradley_terry;
pub mod calculator;
pub mod gaussian;
pub mod model;
pub mod plackett_luce;
pub mod roster;
pub mod thurstone_mosteller;

// Re-export commonly used types
pub use bradley_terry::BradleyTerryFull;
pub use calculator::{DynRater, Rater};
pub use model::{default_gamma, reciprocal_team_count, Gamma, ModelKind, SkillModel};
pub use plackett_luce::PlackettLuce;
pub use roster::{FnRoster, RatingRoster, Roster};
pub use thurstone_mosteller::ThurstoneMostellerFull;
