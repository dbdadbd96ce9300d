//! Change notifications emitted by the registry.

use serde::{Deserialize, Serialize};

use crate::types::{GameId, Goals};

/// Events broadcast after each successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreboardEvent {
    /// A new game went live.
    GameStarted {
        /// New game id.
        id: GameId,
        /// Trimmed home team name.
        home_team: String,
        /// Trimmed away team name.
        away_team: String,
    },
    /// A live game's score was replaced.
    ScoreUpdated {
        /// Updated game id.
        id: GameId,
        /// New home goals.
        home: Goals,
        /// New away goals.
        away: Goals,
    },
    /// A game was finished and removed.
    GameFinished {
        /// Removed game id.
        id: GameId,
    },
}
