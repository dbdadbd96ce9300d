//! Game record, score value, and name/score validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::ScoreboardConfig,
    error::{ScoreboardError, TeamNameProblem},
    types::{GameId, Goals, Side, TimestampMs},
};

/// Validated home/away score pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    home: Goals,
    away: Goals,
}

impl Score {
    /// Validates both values against `config.max_score`.
    pub fn new(home: i32, away: i32, config: &ScoreboardConfig) -> Result<Self, ScoreboardError> {
        Ok(Self {
            home: validate_goals(home, Side::Home, config)?,
            away: validate_goals(away, Side::Away, config)?,
        })
    }

    /// Home goals.
    pub fn home(&self) -> Goals {
        self.home
    }

    /// Away goals.
    pub fn away(&self) -> Goals {
        self.away
    }

    /// Combined goals of both sides.
    pub fn total(&self) -> Goals {
        self.home + self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// One live match: immutable identity plus the current score.
///
/// Instances handed out by the registry are detached copies; the only way to
/// change a live game's score is [`crate::core::registry::GameRegistry::update_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    id: GameId,
    home_team: String,
    away_team: String,
    score: Score,
    started_at_ms: TimestampMs,
}

impl GameRecord {
    /// Builds a 0-0 record after validating and trimming both team names.
    pub fn new(
        id: GameId,
        home_team: &str,
        away_team: &str,
        started_at_ms: TimestampMs,
        config: &ScoreboardConfig,
    ) -> Result<Self, ScoreboardError> {
        let (home_team, away_team) = validate_fixture(home_team, away_team, config)?;
        Ok(Self::from_validated(id, home_team, away_team, started_at_ms))
    }

    /// Assembles a record from names already passed through [`validate_fixture`].
    pub(crate) fn from_validated(
        id: GameId,
        home_team: String,
        away_team: String,
        started_at_ms: TimestampMs,
    ) -> Self {
        Self {
            id,
            home_team,
            away_team,
            score: Score::default(),
            started_at_ms,
        }
    }

    /// Replaces both scores at once. On error the current score is kept.
    pub fn update_score(
        &mut self,
        home: i32,
        away: i32,
        config: &ScoreboardConfig,
    ) -> Result<(), ScoreboardError> {
        self.score = Score::new(home, away, config)?;
        Ok(())
    }

    /// Stable game identifier.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Trimmed home team name.
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    /// Trimmed away team name.
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    /// Current score pair.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current home goals.
    pub fn home_score(&self) -> Goals {
        self.score.home
    }

    /// Current away goals.
    pub fn away_score(&self) -> Goals {
        self.score.away
    }

    /// Sum of both sides' goals.
    pub fn total_score(&self) -> Goals {
        self.score.total()
    }

    /// Start timestamp in milliseconds since epoch.
    pub fn started_at_ms(&self) -> TimestampMs {
        self.started_at_ms
    }

    /// True when `team` is either side of this game (case-sensitive).
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.score.home, self.away_team, self.score.away
        )
    }
}

/// Trims `raw` and checks it is non-empty and within the length limit.
pub fn validate_team_name(
    raw: &str,
    side: Side,
    config: &ScoreboardConfig,
) -> Result<String, ScoreboardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScoreboardError::InvalidTeamName {
            side,
            reason: TeamNameProblem::Empty,
        });
    }

    let len = trimmed.chars().count();
    if len > config.max_team_name_len {
        return Err(ScoreboardError::InvalidTeamName {
            side,
            reason: TeamNameProblem::TooLong {
                len,
                max: config.max_team_name_len,
            },
        });
    }

    Ok(trimmed.to_string())
}

/// Validates both names and rejects identical (case-sensitive) pairs.
pub(crate) fn validate_fixture(
    home_team: &str,
    away_team: &str,
    config: &ScoreboardConfig,
) -> Result<(String, String), ScoreboardError> {
    let home = validate_team_name(home_team, Side::Home, config)?;
    let away = validate_team_name(away_team, Side::Away, config)?;
    if home == away {
        return Err(ScoreboardError::DuplicateTeamName(home));
    }
    Ok((home, away))
}

fn validate_goals(value: i32, side: Side, config: &ScoreboardConfig) -> Result<Goals, ScoreboardError> {
    let invalid = || ScoreboardError::InvalidScore {
        side,
        value,
        max: config.max_score,
    };
    let goals = Goals::try_from(value).map_err(|_| invalid())?;
    if goals > config.max_score {
        return Err(invalid());
    }
    Ok(goals)
}
