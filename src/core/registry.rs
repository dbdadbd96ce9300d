use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use hashbrown::{HashMap, HashSet};
use tokio::sync::broadcast;

use crate::{
    config::ScoreboardConfig,
    error::ScoreboardError,
    events::ScoreboardEvent,
    game::{GameRecord, validate_fixture},
    types::{GameId, TimestampMs},
};

use super::ranking;

/// Authoritative set of live games.
///
/// `games` and `active_teams` sit behind one `RwLock` so they are always
/// changed together. Starting and finishing take the write lock; score
/// updates take the read lock plus the game's own mutex, so updates to
/// different games run in parallel while a finish waits for in-flight
/// updates to drain.
///
/// Concurrent updates to the same game are last-write-wins.
#[derive(Debug)]
pub struct GameRegistry {
    state: RwLock<RegistryState>,
    events_tx: broadcast::Sender<ScoreboardEvent>,
    config: ScoreboardConfig,
}

#[derive(Debug)]
struct RegistryState {
    games: HashMap<GameId, Mutex<GameRecord>>,
    active_teams: HashSet<String>,
    next_id: GameId,
    last_started_at_ms: TimestampMs,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            games: HashMap::new(),
            active_teams: HashSet::new(),
            next_id: 1,
            last_started_at_ms: 0,
        }
    }

    fn take_next_id(&mut self) -> GameId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // Never goes backwards, even if the wall clock does.
    fn next_start_time(&mut self, now_ms: TimestampMs) -> TimestampMs {
        self.last_started_at_ms = self.last_started_at_ms.max(now_ms);
        self.last_started_at_ms
    }

    fn first_active<'a>(&self, teams: [&'a str; 2]) -> Option<&'a str> {
        teams
            .into_iter()
            .find(|team| self.active_teams.contains(*team))
    }
}

impl GameRegistry {
    /// Creates an empty registry with default limits.
    pub fn new() -> Self {
        Self::with_config(ScoreboardConfig::default())
    }

    /// Creates an empty registry with custom limits.
    pub fn with_config(config: ScoreboardConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            state: RwLock::new(RegistryState::new()),
            events_tx,
            config,
        }
    }

    /// Limits in effect for this registry.
    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Subscribes to change events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ScoreboardEvent> {
        self.events_tx.subscribe()
    }

    /// Starts a 0-0 game between two teams that are not currently playing.
    ///
    /// Name validation runs before the exclusivity check. If both teams are
    /// busy, the error names the home team.
    pub fn start_game(&self, home_team: &str, away_team: &str) -> Result<GameRecord, ScoreboardError> {
        let (home, away) = validate_fixture(home_team, away_team, &self.config)
            .inspect_err(|err| tracing::debug!(error = %err, "Start game rejected"))?;

        let mut state = self.write_state();
        if let Some(busy) = state.first_active([home.as_str(), away.as_str()]) {
            tracing::debug!(team = busy, "Start game rejected, team already playing");
            return Err(ScoreboardError::TeamAlreadyPlaying(busy.to_string()));
        }

        let id = state.take_next_id();
        let started_at_ms = state.next_start_time(now_ms());
        let rec = GameRecord::from_validated(id, home, away, started_at_ms);

        state.active_teams.insert(rec.home_team().to_string());
        state.active_teams.insert(rec.away_team().to_string());
        state.games.insert(id, Mutex::new(rec.clone()));

        let _ = self.events_tx.send(ScoreboardEvent::GameStarted {
            id,
            home_team: rec.home_team().to_string(),
            away_team: rec.away_team().to_string(),
        });
        tracing::info!(
            game_id = id,
            home = rec.home_team(),
            away = rec.away_team(),
            live_games = state.games.len(),
            "Game started"
        );

        Ok(rec)
    }

    /// Removes a live game and frees both of its teams.
    ///
    /// Returns `false` when the id is unknown or already finished, so
    /// repeated finish requests are harmless.
    pub fn finish_game(&self, id: GameId) -> bool {
        let mut state = self.write_state();
        let Some(slot) = state.games.remove(&id) else {
            tracing::debug!(game_id = id, "Finish ignored, game not live");
            return false;
        };

        let rec = slot.into_inner().unwrap_or_else(PoisonError::into_inner);
        state.active_teams.remove(rec.home_team());
        state.active_teams.remove(rec.away_team());

        let _ = self.events_tx.send(ScoreboardEvent::GameFinished { id });
        tracing::info!(
            game_id = id,
            home = rec.home_team(),
            away = rec.away_team(),
            score = %rec.score(),
            live_games = state.games.len(),
            "Game finished"
        );

        true
    }

    /// Replaces the score of a live game and returns the updated record.
    pub fn update_score(&self, id: GameId, home: i32, away: i32) -> Result<GameRecord, ScoreboardError> {
        let state = self.read_state();
        let slot = state
            .games
            .get(&id)
            .ok_or(ScoreboardError::GameNotFound(id))
            .inspect_err(|err| tracing::debug!(error = %err, "Score update rejected"))?;

        let mut rec = slot.lock().unwrap_or_else(PoisonError::into_inner);
        rec.update_score(home, away, &self.config)
            .inspect_err(|err| tracing::debug!(game_id = id, error = %err, "Score update rejected"))?;

        let _ = self.events_tx.send(ScoreboardEvent::ScoreUpdated {
            id,
            home: rec.home_score(),
            away: rec.away_score(),
        });
        tracing::debug!(game_id = id, score = %rec.score(), "Score updated");

        Ok(rec.clone())
    }

    /// Returns a copy of the live game, if any.
    pub fn find_game(&self, id: GameId) -> Option<GameRecord> {
        let state = self.read_state();
        state.games.get(&id).map(clone_record)
    }

    /// True when `team` (trimmed, case-sensitive) is in a live game.
    pub fn is_team_playing(&self, team: &str) -> bool {
        self.read_state().active_teams.contains(team.trim())
    }

    /// Point-in-time copy of all active team names.
    pub fn active_teams(&self) -> BTreeSet<String> {
        self.read_state().active_teams.iter().cloned().collect()
    }

    /// Point-in-time copy of all live games in creation order.
    pub fn all_games(&self) -> Vec<GameRecord> {
        let mut games = self.snapshot_games();
        games.sort_unstable_by_key(GameRecord::id);
        games
    }

    /// Live games ranked by total score, then most recently started first.
    pub fn summary(&self) -> Vec<GameRecord> {
        let mut games = self.snapshot_games();
        ranking::rank(&mut games);
        games
    }

    /// Number of live games.
    pub fn game_count(&self) -> usize {
        self.read_state().games.len()
    }

    fn snapshot_games(&self) -> Vec<GameRecord> {
        let state = self.read_state();
        state.games.values().map(clone_record).collect()
    }

    // Every critical section validates before it mutates, so a poisoned lock
    // still guards a consistent state.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn clone_record(slot: &Mutex<GameRecord>) -> GameRecord {
    slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as TimestampMs)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_times_never_go_backwards() {
        let mut state = RegistryState::new();
        assert_eq!(state.next_start_time(100), 100);
        assert_eq!(state.next_start_time(90), 100);
        assert_eq!(state.next_start_time(120), 120);
    }

    #[test]
    fn ids_are_not_consumed_by_rejected_starts() {
        let registry = GameRegistry::new();
        let first = registry.start_game("Spain", "Brazil").unwrap();
        assert!(registry.start_game("Spain", "Germany").is_err());
        assert!(registry.start_game("", "Germany").is_err());
        let second = registry.start_game("Germany", "France").unwrap();
        assert_eq!((first.id(), second.id()), (1, 2));
    }

    #[test]
    fn lock_step_state_after_mixed_operations() {
        let registry = GameRegistry::new();
        let a = registry.start_game("Mexico", "Canada").unwrap();
        let _b = registry.start_game("Spain", "Brazil").unwrap();
        registry.update_score(a.id(), 1, 0).unwrap();
        assert!(registry.finish_game(a.id()));

        let state = registry.read_state();
        assert_eq!(state.games.len() * 2, state.active_teams.len());
        for slot in state.games.values() {
            let rec = slot.lock().unwrap();
            assert!(state.active_teams.contains(rec.home_team()));
            assert!(state.active_teams.contains(rec.away_team()));
        }
    }

    #[test]
    fn update_on_one_game_does_not_wait_for_another() {
        use std::sync::{Arc, mpsc};
        use std::time::Duration;

        let registry = Arc::new(GameRegistry::new());
        let busy = registry.start_game("Spain", "Brazil").unwrap().id();
        let free = registry.start_game("Germany", "France").unwrap().id();

        let state = registry.read_state();
        let held = state.games.get(&busy).unwrap().lock().unwrap();

        let (tx, rx) = mpsc::channel();
        let worker = {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let _ = tx.send(registry.update_score(free, 2, 1));
            })
        };

        let updated = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("update on another game blocked")
            .unwrap();
        assert_eq!((updated.home_score(), updated.away_score()), (2, 1));

        drop(held);
        drop(state);
        worker.join().expect("join");
        assert_eq!(registry.find_game(busy).unwrap().total_score(), 0);
    }
}
