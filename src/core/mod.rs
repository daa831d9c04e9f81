//! Core types: teams, RNG, errors, configuration.
//!
//! This module contains the building blocks that are independent of the
//! question domain. The canon and the generator live on top of these.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use config::{
    QuizConfig, DEFAULT_HARD_BIAS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DISTANCE,
    DEFAULT_MIN_DISTANCE, DEFAULT_TOTAL_QUESTIONS,
};
pub use error::QuizError;
pub use rng::QuizRng;
pub use team::{Team, TeamMap};
