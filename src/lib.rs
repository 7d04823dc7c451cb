//! Parlor Rating - skill rating updates for ranked multi-team games
//!
//! This crate computes new `mu`/`sigma` skill estimates for every player of a
//! finished game using the Bradley-Terry, Plackett-Luce or Thurstone-Mosteller
//! Bayesian approximation models. Players and teams stay in the caller's own
//! types and are reached through a [`Roster`].

pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use config::{Constants, RatingConfig};
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{
    BradleyTerryFull, DynRater, FnRoster, ModelKind, PlackettLuce, Rater, RatingRoster, Roster,
    SkillModel, ThurstoneMostellerFull,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
