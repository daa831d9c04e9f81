//! True/False question generation.
//!
//! ## Generation loop
//!
//! Each question comes from rejection sampling: draw two books through
//! the policy's biased sampler, reject bad pairs, and keep drawing up
//! to a configured attempt bound. Accepted pairs then get a uniformly
//! random relation (before/after) and orientation (which book is the
//! subject), and the statement's truth falls out of canonical order.
//!
//! The used-pair set is updated only when a question is actually
//! produced, so a failed generation leaves no trace.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canon::{BookId, Canon};
use crate::core::{QuizConfig, QuizError, QuizRng};

use super::pair::PairKey;
use super::policy::PairPolicy;

/// Claimed ordering between subject and reference book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The subject is claimed to precede the reference.
    Before,
    /// The subject is claimed to follow the reference.
    After,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Before => write!(f, "before"),
            Relation::After => write!(f, "after"),
        }
    }
}

/// A single True/False question.
///
/// The statement claims the subject book comes before (or after) the
/// reference book in canonical order; `truth` records whether the claim
/// holds. Truth is fixed at generation time and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Rendered statement shown to players.
    pub statement: String,

    /// Whether the statement is actually true.
    pub truth: bool,

    /// Book the claim is about.
    pub subject: BookId,

    /// Book the subject is compared against.
    pub reference: BookId,

    /// Claimed ordering.
    pub relation: Relation,
}

impl Question {
    /// Key identifying the unordered book pair behind this question.
    #[must_use]
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(self.subject, self.reference)
    }
}

/// Produces fresh questions against a canon, config, and used-pair set.
///
/// A cheap view like `PairPolicy`; build one per generation call.
///
/// ## Example
///
/// ```
/// use im::HashSet as ImHashSet;
/// use canon_duel::canon::Canon;
/// use canon_duel::core::{QuizConfig, QuizRng};
/// use canon_duel::question::QuestionGenerator;
///
/// let canon = Canon::protestant();
/// let config = QuizConfig::default();
/// let mut rng = QuizRng::new(42);
/// let mut used = ImHashSet::new();
///
/// let generator = QuestionGenerator::new(&canon, &config);
/// let question = generator.generate(&mut rng, &mut used).unwrap();
///
/// assert!(question.statement.ends_with('.'));
/// assert_eq!(used.len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct QuestionGenerator<'a> {
    canon: &'a Canon,
    config: &'a QuizConfig,
}

impl<'a> QuestionGenerator<'a> {
    /// Create a generator over a canon and config.
    #[must_use]
    pub fn new(canon: &'a Canon, config: &'a QuizConfig) -> Self {
        Self { canon, config }
    }

    /// Generate one fresh question.
    ///
    /// On success the pair's key is added to `used`. On exhaustion
    /// `used` is untouched and `QuizError::PoolExhausted` is returned.
    pub fn generate(
        &self,
        rng: &mut QuizRng,
        used: &mut ImHashSet<PairKey>,
    ) -> Result<Question, QuizError> {
        let policy = PairPolicy::new(self.canon, self.config);

        for attempt in 0..self.config.max_attempts {
            let a = policy.sample_book(rng);
            let b = policy.sample_book(rng);

            let Ok(key) = policy.evaluate(a, b, used) else {
                continue;
            };

            let relation = if rng.coin_flip() {
                Relation::Before
            } else {
                Relation::After
            };

            // Which book plays the subject is its own coin flip, so the
            // statement is true or false with equal probability.
            let (subject, reference) = if rng.coin_flip() { (a, b) } else { (b, a) };

            let truth = match relation {
                Relation::Before => self.canon.is_before(subject, reference),
                Relation::After => !self.canon.is_before(subject, reference),
            };

            let statement = format!(
                "{} is {} {}.",
                self.canon.name(subject),
                relation,
                self.canon.name(reference)
            );

            used.insert(key);

            debug!(
                attempt,
                subject = self.canon.name(subject),
                reference = self.canon.name(reference),
                %relation,
                truth,
                "generated question"
            );

            return Ok(Question {
                statement,
                truth,
                subject,
                reference,
                relation,
            });
        }

        Err(QuizError::PoolExhausted {
            attempts: self.config.max_attempts,
        })
    }
}
