//! Shared primitive IDs and scoreboard enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic game identifier.
pub type GameId = u64;
/// Goals scored by one side.
pub type Goals = u32;
/// Wall-clock timestamp in milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// Which side of a fixture a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Home team.
    Home,
    /// Away team.
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}
