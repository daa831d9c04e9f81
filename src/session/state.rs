//! Match state machine.
//!
//! ## Lifecycle
//!
//! A session moves `NotStarted -> InProgress -> Finished`. While in
//! progress, questions are generated lazily: `ensure_current_question`
//! produces one if none is pending, and `submit_answer` consumes it,
//! scores it, and advances the turn. Answering the final question
//! finishes the match.
//!
//! ## Invariants
//!
//! - A pending question exists only while the match is in progress.
//! - Each generated question adds exactly one entry to the used-pair
//!   set, so no two questions in a match share a book pair.
//! - A team's score equals its count of correct entries in the history.
//! - `start` resets everything except the RNG stream, so consecutive
//!   matches in one session see different questions.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::canon::Canon;
use crate::core::{QuizConfig, QuizError, QuizRng, Team, TeamMap};
use crate::question::{PairKey, Question, QuestionGenerator};

use super::history::HistoryEntry;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created but not yet started.
    #[default]
    NotStarted,
    /// Questions are being asked and answered.
    InProgress,
    /// All questions answered.
    Finished,
}

/// Outcome of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// One team outscored the other.
    Winner(Team),
    /// Both teams finished with the same score.
    Tie,
}

impl MatchResult {
    /// The winning team, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            MatchResult::Winner(team) => Some(team),
            MatchResult::Tie => None,
        }
    }
}

/// A two-team quiz match over the canonical book order.
///
/// Owns the canon, the RNG, and all mutable match state. Single-owner:
/// drive it from one place and clone it for snapshots.
///
/// ## Example
///
/// ```
/// use canon_duel::core::QuizConfig;
/// use canon_duel::session::QuizSession;
///
/// let mut session = QuizSession::with_seed(QuizConfig::default(), 42);
/// session.start();
///
/// while !session.is_finished() {
///     let truth = session.ensure_current_question().unwrap().unwrap().truth;
///     let entry = session.submit_answer(truth).unwrap();
///     assert!(entry.correct);
/// }
///
/// assert!(session.result().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct QuizSession {
    canon: Canon,
    config: QuizConfig,
    rng: QuizRng,
    phase: SessionPhase,
    question_index: u32,
    used_pairs: ImHashSet<PairKey>,
    scores: TeamMap<u32>,
    history: Vector<HistoryEntry>,
    current: Option<Question>,
}

impl QuizSession {
    /// Create a session with a random seed.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self::build(config, QuizRng::from_entropy())
    }

    /// Create a session with an explicit seed, for reproducible matches.
    #[must_use]
    pub fn with_seed(config: QuizConfig, seed: u64) -> Self {
        Self::build(config, QuizRng::new(seed))
    }

    fn build(config: QuizConfig, rng: QuizRng) -> Self {
        Self {
            canon: Canon::protestant(),
            config,
            rng,
            phase: SessionPhase::NotStarted,
            question_index: 0,
            used_pairs: ImHashSet::new(),
            scores: TeamMap::with_value(0),
            history: Vector::new(),
            current: None,
        }
    }

    /// Begin a fresh match, from any phase.
    ///
    /// Clears the question index, used pairs, scores, history, and any
    /// pending question, then enters `InProgress`. The RNG stream
    /// carries on from where it was, so restarting mid-match or after a
    /// finish deals different questions than the last match.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.phase = SessionPhase::InProgress;
        self.question_index = 0;
        self.used_pairs = ImHashSet::new();
        self.scores = TeamMap::with_value(0);
        self.history = Vector::new();
        self.current = None;
        debug!(seed = self.rng.seed(), "match started");
    }

    /// Begin another fresh match. Identical to [`start`](Self::start).
    pub fn restart(&mut self) {
        self.start();
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Has the match started (running or finished)?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    /// Has the match finished?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Number of questions in a full match.
    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.config.total_questions
    }

    /// Zero-based index of the question currently being asked.
    ///
    /// Equals the number of questions already answered.
    #[must_use]
    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    /// One-based number of the current question, for display.
    ///
    /// Meaningful while the match is in progress.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_index + 1
    }

    /// Team on turn, while the match is in progress.
    ///
    /// Red answers even question indices, Blue odd ones.
    #[must_use]
    pub fn current_team(&self) -> Option<Team> {
        match self.phase {
            SessionPhase::InProgress => Some(Team::for_question(self.question_index)),
            _ => None,
        }
    }

    /// The pending question, if one has been generated.
    ///
    /// Never generates; see
    /// [`ensure_current_question`](Self::ensure_current_question).
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Get the pending question, generating one if needed.
    ///
    /// Returns `Ok(None)` when the match is not in progress. Repeated
    /// calls between answers return the same question without touching
    /// the RNG.
    #[instrument(skip(self))]
    pub fn ensure_current_question(&mut self) -> Result<Option<&Question>, QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Ok(None);
        }

        if self.current.is_none() {
            let generator = QuestionGenerator::new(&self.canon, &self.config);
            let question = generator.generate(&mut self.rng, &mut self.used_pairs)?;
            self.current = Some(question);
        }

        Ok(self.current.as_ref())
    }

    /// Answer the pending question.
    ///
    /// Scores the answering team on a correct call, appends the history
    /// entry, advances the turn, and finishes the match after the last
    /// question. Fails with `NoActiveQuestion` when nothing is pending;
    /// the session is untouched on failure.
    #[instrument(skip(self))]
    pub fn submit_answer(&mut self, answer: bool) -> Result<HistoryEntry, QuizError> {
        let question = self.current.take().ok_or(QuizError::NoActiveQuestion)?;

        let team = Team::for_question(self.question_index);
        let correct = answer == question.truth;
        if correct {
            self.scores[team] += 1;
        }

        let entry = HistoryEntry::new(
            self.question_index + 1,
            team,
            question.statement,
            answer,
            correct,
        );
        self.history.push_back(entry.clone());

        self.question_index += 1;
        if self.question_index >= self.config.total_questions {
            self.phase = SessionPhase::Finished;
            debug!(
                red = self.scores[Team::Red],
                blue = self.scores[Team::Blue],
                "match finished"
            );
        }

        debug!(%team, correct, "answer recorded");
        Ok(entry)
    }

    /// Both teams' scores.
    #[must_use]
    pub fn scores(&self) -> &TeamMap<u32> {
        &self.scores
    }

    /// One team's score.
    #[must_use]
    pub fn score(&self, team: Team) -> u32 {
        self.scores[team]
    }

    /// All answered questions, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// Outcome of the match, once finished.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if self.phase != SessionPhase::Finished {
            return None;
        }

        let red = self.scores[Team::Red];
        let blue = self.scores[Team::Blue];
        Some(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => MatchResult::Winner(Team::Red),
            std::cmp::Ordering::Less => MatchResult::Winner(Team::Blue),
            std::cmp::Ordering::Equal => MatchResult::Tie,
        })
    }

    /// Number of distinct book pairs used so far.
    #[must_use]
    pub fn used_pair_count(&self) -> usize {
        self.used_pairs.len()
    }

    /// Seed the session's RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The canon this session asks about.
    #[must_use]
    pub fn canon(&self) -> &Canon {
        &self.canon
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u64) -> QuizSession {
        let mut session = QuizSession::with_seed(QuizConfig::default(), seed);
        session.start();
        session
    }

    #[test]
    fn test_initial_phase() {
        let session = QuizSession::with_seed(QuizConfig::default(), 1);

        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(!session.is_started());
        assert!(!session.is_finished());
        assert_eq!(session.current_team(), None);
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_start_begins_fresh_match() {
        let mut session = QuizSession::with_seed(QuizConfig::default(), 1);

        session.start();
        assert_eq!(session.phase(), SessionPhase::InProgress);

        // Play a couple of questions, then start over mid-match.
        for _ in 0..2 {
            session.ensure_current_question().unwrap();
            session.submit_answer(true).unwrap();
        }
        session.start();

        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.used_pair_count(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn test_ensure_before_start_is_none() {
        let mut session = QuizSession::with_seed(QuizConfig::default(), 1);

        assert_eq!(session.ensure_current_question().unwrap(), None);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut session = started(5);

        let first = session.ensure_current_question().unwrap().unwrap().clone();
        let second = session.ensure_current_question().unwrap().unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(session.used_pair_count(), 1);
    }

    #[test]
    fn test_submit_without_question_fails() {
        let mut session = started(5);

        let err = session.submit_answer(true).unwrap_err();
        assert_eq!(err, QuizError::NoActiveQuestion);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn test_double_submit_fails() {
        let mut session = started(5);

        session.ensure_current_question().unwrap();
        session.submit_answer(true).unwrap();

        let err = session.submit_answer(true).unwrap_err();
        assert_eq!(err, QuizError::NoActiveQuestion);
        assert_eq!(session.question_index(), 1);
    }

    #[test]
    fn test_turn_alternation() {
        let mut session = started(9);

        for i in 0..6 {
            let expected = if i % 2 == 0 { Team::Red } else { Team::Blue };
            assert_eq!(session.current_team(), Some(expected));

            session.ensure_current_question().unwrap();
            let entry = session.submit_answer(true).unwrap();
            assert_eq!(entry.team, expected);
            assert_eq!(entry.number, i + 1);
        }
    }

    #[test]
    fn test_score_attribution() {
        let mut session = started(13);

        // Red answers correctly, Blue incorrectly, for two rounds.
        for _ in 0..2 {
            let truth = session.ensure_current_question().unwrap().unwrap().truth;
            session.submit_answer(truth).unwrap();

            let truth = session.ensure_current_question().unwrap().unwrap().truth;
            session.submit_answer(!truth).unwrap();
        }

        assert_eq!(session.score(Team::Red), 2);
        assert_eq!(session.score(Team::Blue), 0);
    }

    #[test]
    fn test_full_match_finishes() {
        let mut session = started(21);

        for _ in 0..15 {
            assert!(!session.is_finished());
            session.ensure_current_question().unwrap();
            session.submit_answer(false).unwrap();
        }

        assert!(session.is_finished());
        assert_eq!(session.question_index(), 15);
        assert_eq!(session.history().len(), 15);
        assert_eq!(session.current_team(), None);
        assert_eq!(session.ensure_current_question().unwrap(), None);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = started(33);

        for _ in 0..4 {
            session.ensure_current_question().unwrap();
            session.submit_answer(true).unwrap();
        }
        assert!(session.used_pair_count() > 0);

        session.restart();

        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.used_pair_count(), 0);
        assert_eq!(session.score(Team::Red), 0);
        assert_eq!(session.score(Team::Blue), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn test_restart_continues_rng_stream() {
        let mut fresh = started(33);
        let mut replayed = started(33);

        let opening: Vec<_> = (0..3)
            .map(|_| {
                let q = fresh.ensure_current_question().unwrap().unwrap().clone();
                fresh.submit_answer(true).unwrap();
                q
            })
            .collect();

        // Same seed, same opening questions.
        for expected in &opening {
            let q = replayed.ensure_current_question().unwrap().unwrap().clone();
            assert_eq!(&q, expected);
            replayed.submit_answer(true).unwrap();
        }

        // A restart continues the stream instead of replaying it from
        // the seed, so the rematch opens differently.
        replayed.restart();
        let reopening: Vec<_> = (0..3)
            .map(|_| {
                let q = replayed.ensure_current_question().unwrap().unwrap().clone();
                replayed.submit_answer(true).unwrap();
                q
            })
            .collect();
        assert_ne!(opening, reopening);
    }

    #[test]
    fn test_result_winner_and_tie() {
        // All answers correct: Red gets the 8 even-indexed questions,
        // Blue the 7 odd ones.
        let mut session = started(55);
        while !session.is_finished() {
            let truth = session.ensure_current_question().unwrap().unwrap().truth;
            session.submit_answer(truth).unwrap();
        }
        assert_eq!(session.score(Team::Red), 8);
        assert_eq!(session.score(Team::Blue), 7);
        assert_eq!(session.result(), Some(MatchResult::Winner(Team::Red)));
        assert_eq!(session.result().unwrap().winner(), Some(Team::Red));

        // Red misses its last question: 7 to 7.
        let mut session = started(56);
        while !session.is_finished() {
            let index = session.question_index();
            let truth = session.ensure_current_question().unwrap().unwrap().truth;
            let answer = if index == 14 { !truth } else { truth };
            session.submit_answer(answer).unwrap();
        }
        assert_eq!(session.score(Team::Red), 7);
        assert_eq!(session.score(Team::Blue), 7);
        assert_eq!(session.result(), Some(MatchResult::Tie));
        assert_eq!(session.result().unwrap().winner(), None);
    }

    #[test]
    fn test_seed_accessor() {
        let session = QuizSession::with_seed(QuizConfig::default(), 777);
        assert_eq!(session.seed(), 777);
    }

    #[test]
    fn test_phase_serialization() {
        let phase = SessionPhase::InProgress;
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: SessionPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);

        assert_eq!(SessionPhase::default(), SessionPhase::NotStarted);
    }
}
