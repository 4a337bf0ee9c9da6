//! Core engine types: players, state, move records, RNG, configuration.
//!
//! These are the building blocks shared by the rules engine, the session
//! driver, and renderers.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
pub use action::MoveRecord;
pub use state::{Snapshot, TurnState};
