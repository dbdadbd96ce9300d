//! Thread-safe in-memory registry of live matches with a ranked summary.
//!
//! # Examples
//!
//! ```
//! use scoreboard::core::registry::GameRegistry;
//!
//! let registry = GameRegistry::new();
//! let mexico = registry.start_game("Mexico", "Canada").expect("start");
//! let spain = registry.start_game("Spain", "Brazil").expect("start");
//!
//! registry.update_score(mexico.id(), 0, 5).expect("update");
//! registry.update_score(spain.id(), 10, 2).expect("update");
//!
//! let summary: Vec<String> = registry.summary().iter().map(ToString::to_string).collect();
//! assert_eq!(summary, ["Spain 10 - Brazil 2", "Mexico 0 - Canada 5"]);
//!
//! assert!(registry.finish_game(mexico.id()));
//! assert!(!registry.finish_game(mexico.id()));
//! assert!(!registry.is_team_playing("Mexico"));
//! ```
//!
//! Sharing across threads and watching changes:
//! ```
//! use std::sync::Arc;
//!
//! use scoreboard::{
//!     config::ScoreboardConfig,
//!     core::registry::GameRegistry,
//!     error::ScoreboardError,
//!     events::ScoreboardEvent,
//! };
//!
//! let registry = Arc::new(GameRegistry::with_config(ScoreboardConfig {
//!     max_score: 20,
//!     ..ScoreboardConfig::default()
//! }));
//! assert_eq!(registry.config().max_score, 20);
//! let mut events = registry.subscribe();
//!
//! let worker = {
//!     let registry = Arc::clone(&registry);
//!     std::thread::spawn(move || registry.start_game("Uruguay", "Italy"))
//! };
//! let game = worker.join().expect("join").expect("start");
//!
//! assert_eq!(
//!     registry.update_score(game.id(), 21, 0),
//!     Err(ScoreboardError::InvalidScore { side: scoreboard::types::Side::Home, value: 21, max: 20 }),
//! );
//! assert!(matches!(events.try_recv(), Ok(ScoreboardEvent::GameStarted { .. })));
//! ```
#![deny(missing_docs)]

/// Registry limits.
pub mod config;
/// Live game registry and summary ranking.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Change event payloads.
pub mod events;
/// Game record and score types.
pub mod game;
/// Shared primitive types and enums.
pub mod types;
