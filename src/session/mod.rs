//! Match sessions: lifecycle, scoring, and history.

pub mod history;
pub mod state;

pub use history::HistoryEntry;
pub use state::{MatchResult, QuizSession, SessionPhase};
