//! Deterministic random number generation for question sampling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Reproducible sessions**: The creation seed is retained, so a
//!   session built with `from_entropy` can still report how to replay it
//!
//! ## Usage
//!
//! ```
//! use canon_duel::core::QuizRng;
//!
//! let mut rng1 = QuizRng::new(42);
//! let mut rng2 = QuizRng::new(42);
//!
//! // Same seed, same decisions
//! assert_eq!(rng1.gen_bool(0.75), rng2.gen_bool(0.75));
//! assert_eq!(rng1.gen_range_usize(0..66), rng2.gen_range_usize(0..66));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for pair sampling and phrasing decisions.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Every random decision the engine makes (pool selection,
/// book picks, relation, orientation) draws from this single stream, so
/// a seed fully determines a session's questions.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and queryable via [`QuizRng::seed`],
    /// so a live session can still be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Fair coin flip.
    ///
    /// Used for the relation choice and the subject/reference swap.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty; callers index fixed non-empty pools.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
