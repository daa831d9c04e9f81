//! Answered-question records.

use serde::{Deserialize, Serialize};

use crate::core::Team;

/// One answered question, as recorded in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// One-based question number within the match.
    pub number: u32,

    /// Team that answered.
    pub team: Team,

    /// Statement the team judged.
    pub statement: String,

    /// The team's True/False call.
    pub answer: bool,

    /// Whether the call matched the statement's truth.
    pub correct: bool,
}

impl HistoryEntry {
    /// Create a history entry.
    #[must_use]
    pub fn new(number: u32, team: Team, statement: String, answer: bool, correct: bool) -> Self {
        Self {
            number,
            team,
            statement,
            answer,
            correct,
        }
    }
}
