//! Game state as seen from outside the engine.
//!
//! ## TurnState
//!
//! The two-state machine driving a game: waiting for a player to roll, or
//! finished with a winner. `Finished` is terminal.
//!
//! ## Snapshot
//!
//! An owned, immutable copy of everything a renderer needs:
//! - Both token positions
//! - The last dice value
//! - Whose turn it is and who (if anyone) has won
//! - The move history
//!
//! Snapshots use `im` persistent vectors for the history, so handing one to a
//! render thread after every roll is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::player::{PlayerId, PlayerMap};
use crate::board::Cell;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The given player must roll next.
    AwaitingRoll(PlayerId),
    /// The given player reached the goal. No more rolls are accepted.
    Finished(PlayerId),
}

impl TurnState {
    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn to_move(self) -> Option<PlayerId> {
        match self {
            TurnState::AwaitingRoll(p) => Some(p),
            TurnState::Finished(_) => None,
        }
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TurnState::AwaitingRoll(_) => None,
            TurnState::Finished(p) => Some(p),
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Finished(_))
    }
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::AwaitingRoll(PlayerId::ONE)
    }
}

/// Read-only view of a game, handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Token position per player.
    pub positions: PlayerMap<Cell>,

    /// The most recent dice value, `None` before the first roll.
    pub last_roll: Option<u32>,

    /// The player whose turn it is. Once finished, the winner.
    pub current_turn: PlayerId,

    /// The winner, if the game is over.
    pub winner: Option<PlayerId>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Every move so far, oldest first.
    pub history: Vector<MoveRecord>,
}

impl Snapshot {
    /// Position of a player's token.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Cell {
        self.positions[player]
    }

    /// Player 1's position.
    #[must_use]
    pub fn player_one(&self) -> Cell {
        self.positions[PlayerId::ONE]
    }

    /// Player 2's position.
    #[must_use]
    pub fn player_two(&self) -> Cell {
        self.positions[PlayerId::TWO]
    }

    /// The most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The lifecycle state this snapshot was taken in.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        match self.winner {
            Some(winner) => TurnState::Finished(winner),
            None => TurnState::AwaitingRoll(self.current_turn),
        }
    }
}
