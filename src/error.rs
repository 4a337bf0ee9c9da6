//! Error types for the rules engine and its configuration.

use std::path::PathBuf;

use crate::board::Cell;
use crate::core::PlayerId;

/// Errors returned when a roll cannot be applied.
///
/// Either way the game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("dice value {0} is outside 1..=6")]
    OutOfRange(u32),

    #[error("game over: {winner} has already won")]
    GameOver { winner: PlayerId },
}

/// Errors raised while building a jump table or loading session settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cell {cell} appears as both a snake and a ladder")]
    DuplicateJump { cell: Cell },

    #[error("snake at {from} must lead down, not to {to}")]
    SnakeGoesUp { from: Cell, to: Cell },

    #[error("ladder at {from} must lead up, not to {to}")]
    LadderGoesDown { from: Cell, to: Cell },

    #[error("jump from {from} lands on {to}, which is itself a jump")]
    ChainedJump { from: Cell, to: Cell },

    #[error("the goal cell cannot start a jump")]
    JumpFromGoal,

    #[error("cell {0} is off the board")]
    OffBoard(i32),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
