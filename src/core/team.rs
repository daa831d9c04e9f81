//! Team identification and per-team data storage.
//!
//! ## Team
//!
//! Exactly two teams compete: Red and Blue. Turn attribution is derived
//! from question-index parity rather than stored anywhere. Even indices
//! belong to Red, odd to Blue.
//!
//! ## TeamMap
//!
//! Per-team data storage with O(1) access, indexable by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Red team, answering even-indexed questions (0, 2, 4, ...).
    Red,
    /// Blue team, answering odd-indexed questions (1, 3, 5, ...).
    Blue,
}

impl Team {
    /// Team responsible for the question at the given index.
    ///
    /// ```
    /// use canon_duel::core::Team;
    ///
    /// assert_eq!(Team::for_question(0), Team::Red);
    /// assert_eq!(Team::for_question(1), Team::Blue);
    /// assert_eq!(Team::for_question(14), Team::Red);
    /// ```
    #[must_use]
    pub const fn for_question(index: u32) -> Team {
        if index % 2 == 0 {
            Team::Red
        } else {
            Team::Blue
        }
    }

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Both teams, Red first.
    pub fn both() -> impl Iterator<Item = Team> {
        [Team::Red, Team::Blue].into_iter()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "Red"),
            Team::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// One entry per team, indexable by `Team`. Used for the scoreboard.
///
/// ## Example
///
/// ```
/// use canon_duel::core::{Team, TeamMap};
///
/// let mut scores: TeamMap<u32> = TeamMap::with_value(0);
///
/// scores[Team::Red] += 1;
/// assert_eq!(scores[Team::Red], 1);
/// assert_eq!(scores[Team::Blue], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    red: T,
    blue: T,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with explicit values per team.
    #[must_use]
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Create a new TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Team, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::Red, &self.red), (Team::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
