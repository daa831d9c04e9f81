//! Quiz configuration.
//!
//! All tunables live in one place with sensible defaults. Callers
//! override individual knobs through the `with_*` builder methods:
//!
//! ```
//! use canon_duel::core::QuizConfig;
//!
//! let config = QuizConfig::default()
//!     .with_total_questions(10)
//!     .with_hard_bias(0.9);
//!
//! assert_eq!(config.total_questions, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Questions per match.
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 15;

/// Probability that each book of a pair is drawn from the hard pool.
pub const DEFAULT_HARD_BIAS: f64 = 0.75;

/// Minimum canonical distance between the two books of a pair.
pub const DEFAULT_MIN_DISTANCE: usize = 2;

/// Maximum canonical distance between the two books of a pair.
pub const DEFAULT_MAX_DISTANCE: usize = 45;

/// Sampling attempts before the generator gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5000;

/// Configuration for a quiz match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of questions in a full match.
    pub total_questions: u32,

    /// Per-book probability of sampling from the hard pool. The two
    /// books of a pair roll independently.
    pub hard_bias: f64,

    /// Smallest accepted distance between paired books (inclusive).
    pub min_distance: usize,

    /// Largest accepted distance between paired books (inclusive).
    pub max_distance: usize,

    /// Attempt bound for the generator's rejection loop.
    pub max_attempts: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            hard_bias: DEFAULT_HARD_BIAS,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl QuizConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of questions per match.
    #[must_use]
    pub fn with_total_questions(mut self, total: u32) -> Self {
        assert!(total > 0, "Must have at least 1 question");
        self.total_questions = total;
        self
    }

    /// Set the hard-pool sampling bias.
    #[must_use]
    pub fn with_hard_bias(mut self, bias: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&bias),
            "Hard bias must be in [0.0, 1.0]"
        );
        self.hard_bias = bias;
        self
    }

    /// Set the accepted distance range (inclusive on both ends).
    ///
    /// No validation that the range admits any pair: a range no pair
    /// can satisfy makes the generator report pool exhaustion instead.
    #[must_use]
    pub fn with_distance_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Set the generator's attempt bound.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.total_questions, DEFAULT_TOTAL_QUESTIONS);
        assert_eq!(config.hard_bias, DEFAULT_HARD_BIAS);
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(config.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_builder_methods() {
        let config = QuizConfig::default()
            .with_total_questions(5)
            .with_hard_bias(0.5)
            .with_distance_bounds(3, 20)
            .with_max_attempts(100);

        assert_eq!(config.total_questions, 5);
        assert_eq!(config.hard_bias, 0.5);
        assert_eq!(config.min_distance, 3);
        assert_eq!(config.max_distance, 20);
        assert_eq!(config.max_attempts, 100);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 question")]
    fn test_zero_questions_rejected() {
        QuizConfig::default().with_total_questions(0);
    }

    #[test]
    #[should_panic(expected = "Hard bias must be in [0.0, 1.0]")]
    fn test_bias_above_one_rejected() {
        QuizConfig::default().with_hard_bias(1.5);
    }

    #[test]
    fn test_impossible_distance_bounds_allowed() {
        // Accepted at construction; surfaces as pool exhaustion at
        // generation time instead.
        let config = QuizConfig::default().with_distance_bounds(50, 10);
        assert_eq!(config.min_distance, 50);
        assert_eq!(config.max_distance, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = QuizConfig::default().with_total_questions(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
