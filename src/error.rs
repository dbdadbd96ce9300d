//! Error taxonomy for registry and record operations.

use std::fmt;

use crate::types::{GameId, Goals, Side};

/// Why a team name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamNameProblem {
    /// Empty or whitespace-only.
    Empty,
    /// Longer than the configured limit.
    TooLong {
        /// Length of the trimmed name, in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Failure returned by [`crate::game::GameRecord`] and
/// [`crate::core::registry::GameRegistry`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    /// A team name failed validation.
    InvalidTeamName {
        /// Side carrying the bad name.
        side: Side,
        /// What was wrong with it.
        reason: TeamNameProblem,
    },
    /// Home and away names are identical after trimming.
    DuplicateTeamName(String),
    /// The named team already has a live game.
    TeamAlreadyPlaying(String),
    /// A score was negative or above the configured maximum.
    InvalidScore {
        /// Side carrying the bad score.
        side: Side,
        /// Rejected value.
        value: i32,
        /// Configured maximum.
        max: Goals,
    },
    /// No live game has this id.
    GameNotFound(GameId),
}

impl fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreboardError::InvalidTeamName {
                side,
                reason: TeamNameProblem::Empty,
            } => write!(f, "{side} team name cannot be empty"),
            ScoreboardError::InvalidTeamName {
                side,
                reason: TeamNameProblem::TooLong { len, max },
            } => write!(
                f,
                "{side} team name too long (max {max} characters, got {len})"
            ),
            ScoreboardError::DuplicateTeamName(name) => {
                write!(f, "home and away teams cannot be the same: {name}")
            }
            ScoreboardError::TeamAlreadyPlaying(name) => {
                write!(f, "team '{name}' is already playing in another ongoing game")
            }
            ScoreboardError::InvalidScore { side, value, max } if *value < 0 => {
                write!(f, "{side} score cannot be negative (got {value}, max {max})")
            }
            ScoreboardError::InvalidScore { side, value, max } => {
                write!(f, "{side} score exceeds maximum of {max} (got {value})")
            }
            ScoreboardError::GameNotFound(id) => write!(f, "cannot find game with id: {id}"),
        }
    }
}

impl std::error::Error for ScoreboardError {}
