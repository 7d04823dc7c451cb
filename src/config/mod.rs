//! Configuration for the rating engine
//!
//! This module holds the model constants and the model selection, with
//! defaults and validation. Loading is from in-memory TOML or JSON only.

pub mod constants;
pub mod rating;

// Re-export commonly used types
pub use constants::Constants;
pub use rating::RatingConfig;
