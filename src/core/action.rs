//! Move records.
//!
//! Every applied roll produces a `MoveRecord`: who moved, by how much, where
//! the token landed, and where it finished after any snake or ladder. The
//! engine keeps them as an append-only history for replay and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{Cell, JumpKind};

/// One resolved move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Turn number, starting at 1.
    pub turn: u32,

    /// Steps moved (the dice value).
    pub roll: u32,

    /// Cell before the move.
    pub from: Cell,

    /// Cell reached by counting steps, clamped to the goal.
    pub landed: Cell,

    /// Cell after any jump.
    pub to: Cell,

    /// The jump taken, if the landing cell had one.
    pub jump: Option<JumpKind>,
}

impl MoveRecord {
    /// Did this move take a snake?
    #[must_use]
    pub fn hit_snake(&self) -> bool {
        self.jump == Some(JumpKind::Snake)
    }

    /// Did this move climb a ladder?
    #[must_use]
    pub fn climbed_ladder(&self) -> bool {
        self.jump == Some(JumpKind::Ladder)
    }

    /// Did this move win the game?
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.to.is_goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(landed: u8, to: u8, jump: Option<JumpKind>) -> MoveRecord {
        MoveRecord {
            player: PlayerId::ONE,
            turn: 1,
            roll: 3,
            from: Cell::new(landed - 3),
            landed: Cell::new(landed),
            to: Cell::new(to),
            jump,
        }
    }

    #[test]
    fn test_jump_flags() {
        let snake = record(17, 7, Some(JumpKind::Snake));
        assert!(snake.hit_snake());
        assert!(!snake.climbed_ladder());

        let ladder = record(28, 84, Some(JumpKind::Ladder));
        assert!(ladder.climbed_ladder());
        assert!(!ladder.is_winning());
    }

    #[test]
    fn test_winning_move() {
        assert!(record(100, 100, None).is_winning());
    }

    #[test]
    fn test_move_record_serialization() {
        let original = record(80, 99, Some(JumpKind::Ladder));
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }
}
