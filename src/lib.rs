//! # canon-duel
//!
//! A two-team True/False quiz engine over the canonical order of the
//! 66 books of the Bible.
//!
//! ## Design Principles
//!
//! 1. **Order As Data**: The canon is a value, not code. Positions and
//!    truth values all derive from one embedded listing.
//!
//! 2. **Deterministic Play**: Every random choice flows through one
//!    seeded RNG, so a seed reproduces a whole match.
//!
//! 3. **No Repeats**: Each unordered book pair appears at most once per
//!    match, enforced by a persistent used-pair set.
//!
//! ## Modules
//!
//! - `core`: Teams, RNG, errors, configuration
//! - `canon`: The 66-book ordering, lookups, sampling pools
//! - `question`: Pair policy and question generation
//! - `session`: Match lifecycle, scoring, history
//!
//! ## Example
//!
//! ```
//! use canon_duel::core::{QuizConfig, Team};
//! use canon_duel::session::QuizSession;
//!
//! let mut session = QuizSession::with_seed(QuizConfig::default(), 42);
//! session.start();
//!
//! while !session.is_finished() {
//!     let truth = session.ensure_current_question().unwrap().unwrap().truth;
//!     session.submit_answer(truth).unwrap();
//! }
//!
//! // Red opens and closes a 15-question match, so perfect play
//! // gives Red 8 and Blue 7.
//! assert_eq!(session.score(Team::Red), 8);
//! assert_eq!(session.score(Team::Blue), 7);
//! ```

pub mod canon;
pub mod core;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    QuizConfig, QuizError, QuizRng,
    Team, TeamMap,
};

pub use crate::canon::{BookId, Canon};

pub use crate::question::{
    PairKey, PairPolicy, Question, QuestionGenerator, Rejection, Relation,
};

pub use crate::session::{HistoryEntry, MatchResult, QuizSession, SessionPhase};
