//! Error types for quiz operations.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the quiz engine.
///
/// Pair-candidate rejections (same book, bad distance, already used) are
/// internal to the generator's retry loop and never escape as errors; only
/// conditions the caller must handle appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum QuizError {
    /// A book name was not found in the canon.
    #[error("unknown book: {name}")]
    UnknownBook { name: String },

    /// The generator exhausted its attempt bound without finding an
    /// acceptable pair.
    #[error("question pool exhausted after {attempts} attempts")]
    PoolExhausted { attempts: u32 },

    /// An answer was submitted with no question pending.
    #[error("no active question")]
    NoActiveQuestion,
}
