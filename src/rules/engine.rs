//! The turn engine: positions, rolls, jumps, turn order, and the win.
//!
//! ## State machine
//!
//! ```text
//! AwaitingRoll(p) --apply_roll(v)--> AwaitingRoll(other p)   (no win)
//!                                 \-> Finished(p)            (reached 100)
//! Finished(p)     --apply_roll(v)--> Err(GameOver), unchanged
//! ```
//!
//! A move adds the roll to the mover's cell. Overshooting the goal clamps to
//! 100 and still wins. Otherwise the landing cell is resolved once through
//! the jump table.

use im::Vector;
use tracing::{debug, info};

use crate::board::{Cell, JumpTable};
use crate::core::{MoveRecord, PlayerId, PlayerMap, Snapshot, TurnState};
use crate::dice::is_face;
use crate::error::RollError;

/// Result of a successfully applied roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// What happened to the mover's token.
    pub record: MoveRecord,
    /// The state after the move.
    pub state: TurnState,
}

impl MoveOutcome {
    /// The winner, if this move ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }
}

/// Owns the game state and applies rolls to it.
///
/// ## Example
///
/// ```
/// use snake_ladder::board::{Cell, JumpTable};
/// use snake_ladder::core::{PlayerId, TurnState};
/// use snake_ladder::rules::TurnEngine;
///
/// let mut engine = TurnEngine::new(JumpTable::standard());
///
/// // Player 1 rolls a 3 and climbs the ladder on 4
/// let outcome = engine.apply_roll(3).unwrap();
/// assert_eq!(outcome.record.to, Cell::new(14));
/// assert_eq!(engine.state(), TurnState::AwaitingRoll(PlayerId::TWO));
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    jumps: JumpTable,
    positions: PlayerMap<Cell>,
    state: TurnState,
    last_roll: Option<u32>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl TurnEngine {
    /// Start a game: both tokens on cell 1, player 1 to move.
    #[must_use]
    pub fn new(jumps: JumpTable) -> Self {
        Self {
            jumps,
            positions: PlayerMap::with_value(Cell::START),
            state: TurnState::default(),
            last_roll: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Apply a dice value for the player to move.
    ///
    /// Rejects values outside `1..=6` and any roll after the game is over.
    /// A rejected roll leaves the state untouched.
    pub fn apply_roll(&mut self, value: u32) -> Result<MoveOutcome, RollError> {
        self.ensure_running()?;
        if !is_face(value) {
            return Err(RollError::OutOfRange(value));
        }
        self.advance(value)
    }

    /// Move the current player `steps` cells, skipping the dice-range check.
    ///
    /// Follows the same transition as [`TurnEngine::apply_roll`]. Useful for
    /// scripted positions. `steps` must still be at least 1.
    pub fn advance(&mut self, steps: u32) -> Result<MoveOutcome, RollError> {
        let player = self.ensure_running()?;
        if steps == 0 {
            return Err(RollError::OutOfRange(steps));
        }

        let from = self.positions[player];
        let target = u32::from(from.index()).saturating_add(steps);

        // Clamped landings are the goal, which never starts a jump
        let (landed, jump) = if target >= u32::from(Cell::GOAL.index()) {
            (Cell::GOAL, None)
        } else {
            let landed = Cell::new(target as u8);
            (landed, self.jumps.jump_at(landed))
        };
        let to = jump.map_or(landed, |j| j.to);

        let record = MoveRecord {
            player,
            turn: self.turn_number,
            roll: steps,
            from,
            landed,
            to,
            jump: jump.map(|j| j.kind),
        };

        self.positions[player] = to;
        self.last_roll = Some(steps);
        self.history.push_back(record);

        debug!(%player, roll = steps, from = from.index(), to = to.index(), "move applied");
        if let Some(jump) = jump {
            info!(%player, kind = ?jump.kind, from = jump.from.index(), to = jump.to.index(), "jump taken");
        }

        if to.is_goal() {
            self.state = TurnState::Finished(player);
            info!(%player, turns = self.turn_number, "game won");
        } else {
            self.state = TurnState::AwaitingRoll(player.other());
            self.turn_number += 1;
        }

        Ok(MoveOutcome {
            record,
            state: self.state,
        })
    }

    fn ensure_running(&self) -> Result<PlayerId, RollError> {
        match self.state {
            TurnState::AwaitingRoll(player) => Ok(player),
            TurnState::Finished(winner) => Err(RollError::GameOver { winner }),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The player to move, `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.to_move()
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// A player's current cell.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Cell {
        self.positions[player]
    }

    /// The most recent dice value.
    #[must_use]
    pub fn last_roll(&self) -> Option<u32> {
        self.last_roll
    }

    /// Turn number (starts at 1, advances when play passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The board's snakes and ladders.
    #[must_use]
    pub fn jumps(&self) -> &JumpTable {
        &self.jumps
    }

    /// Every move so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Capture an immutable view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let current_turn = match self.state {
            TurnState::AwaitingRoll(p) | TurnState::Finished(p) => p,
        };
        Snapshot {
            positions: self.positions,
            last_roll: self.last_roll,
            current_turn,
            winner: self.state.winner(),
            turn_number: self.turn_number,
            history: self.history.clone(),
        }
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(JumpTable::standard())
    }
}
