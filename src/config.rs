//! Registry limits and channel sizing.

use crate::types::Goals;

/// Default upper bound for a trimmed team name, in characters.
pub const DEFAULT_MAX_TEAM_NAME_LEN: usize = 50;
/// Default upper bound for a single side's score.
pub const DEFAULT_MAX_SCORE: Goals = 50;
/// Default capacity of the change-event broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Limits applied by [`crate::core::registry::GameRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardConfig {
    /// Maximum team name length after trimming, counted in `char`s.
    pub max_team_name_len: usize,
    /// Maximum goals a single side may have.
    pub max_score: Goals,
    /// Buffered events per subscriber before the oldest are dropped.
    pub event_capacity: usize,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            max_team_name_len: DEFAULT_MAX_TEAM_NAME_LEN,
            max_score: DEFAULT_MAX_SCORE,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
