//! # snake-ladder
//!
//! A two-player Snake & Ladder rules engine with a pluggable renderer.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: The turn engine never rolls dice or draws. It takes
//!    dice values in and hands `Snapshot`s out.
//!
//! 2. **Structural Game Over**: The engine is an explicit two-state machine
//!    (`AwaitingRoll` / `Finished`). Rolls after a win are rejected by the
//!    state itself, not by a flag the caller must check.
//!
//! 3. **Injectable Randomness**: Dice are a `DiceRoller` trait. Production
//!    uses a clock-seeded ChaCha die, tests use seeded or scripted dice.
//!
//! ## Modules
//!
//! - `core`: Players, snapshots, move records, RNG, session configuration
//! - `board`: Cells, serpentine topology, snakes and ladders
//! - `dice`: Dice rollers
//! - `rules`: The turn engine
//! - `session`: Dice + engine packaged for an event loop
//! - `render`: Renderer trait, pixel layout, dice spin, text renderer

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod session;
pub mod render;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    SessionConfig,
    MoveRecord,
    Snapshot, TurnState,
};

pub use crate::board::{position_of, BoardCoordinate, Cell, Jump, JumpKind, JumpTable};

pub use crate::dice::{DiceRoller, Die, ScriptedDice};

pub use crate::rules::{MoveOutcome, TurnEngine};

pub use crate::session::GameSession;

pub use crate::render::{BoardLayout, DiceSpin, Renderer, TextRenderer};

pub use crate::error::{ConfigError, RollError};
