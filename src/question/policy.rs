//! Pair sampling and acceptance policy.
//!
//! The policy decides two things: which book a single draw produces
//! (hard-pool bias), and whether a candidate pair is acceptable for a
//! question (distinct, distance in bounds, not yet used).

use im::HashSet as ImHashSet;

use crate::canon::{BookId, Canon};
use crate::core::{QuizConfig, QuizRng};

use super::pair::PairKey;

/// Why a candidate pair was rejected.
///
/// Internal to the generator's retry loop; rejections are retried, not
/// surfaced to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Both draws produced the same book.
    SameBook,
    /// The books are nearly adjacent, making the answer obvious.
    TooClose { distance: usize },
    /// The books are far apart, making the answer obvious.
    TooFar { distance: usize },
    /// This pair already produced a question this match.
    AlreadyUsed,
}

/// Sampling and acceptance rules for book pairs.
///
/// A cheap view over the canon and config; build one per generation
/// call.
#[derive(Clone, Copy, Debug)]
pub struct PairPolicy<'a> {
    canon: &'a Canon,
    config: &'a QuizConfig,
}

impl<'a> PairPolicy<'a> {
    /// Create a policy over a canon and config.
    #[must_use]
    pub fn new(canon: &'a Canon, config: &'a QuizConfig) -> Self {
        Self { canon, config }
    }

    /// Draw one book.
    ///
    /// With probability `hard_bias` the draw comes from the hard pool,
    /// otherwise from the full canon. The fallback pool is the whole
    /// canon, so hard books stay reachable either way.
    pub fn sample_book(&self, rng: &mut QuizRng) -> BookId {
        if rng.gen_bool(self.config.hard_bias) {
            let pool = self.canon.hard_books();
            pool[rng.gen_range_usize(0..pool.len())]
        } else {
            BookId::new(rng.gen_range_usize(0..self.canon.len()) as u8)
        }
    }

    /// Judge a candidate pair.
    ///
    /// Checks run cheapest-first: identity, distance bounds, then the
    /// used set. Returns the pair's key on acceptance.
    pub fn evaluate(
        &self,
        a: BookId,
        b: BookId,
        used: &ImHashSet<PairKey>,
    ) -> Result<PairKey, Rejection> {
        if a == b {
            return Err(Rejection::SameBook);
        }

        let distance = self.canon.distance(a, b);
        if distance < self.config.min_distance {
            return Err(Rejection::TooClose { distance });
        }
        if distance > self.config.max_distance {
            return Err(Rejection::TooFar { distance });
        }

        let key = PairKey::new(a, b);
        if used.contains(&key) {
            return Err(Rejection::AlreadyUsed);
        }

        Ok(key)
    }
}
