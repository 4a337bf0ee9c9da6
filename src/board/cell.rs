//! Cell indices.
//!
//! A `Cell` is a 1-based position on the board. Cell 1 is the start and
//! cell 100 is the goal. Every way of building a `Cell` keeps it in range.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_CELLS: u8 = 100;

/// A board cell in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// The starting cell.
    pub const START: Cell = Cell(1);
    /// The goal cell. Reaching it wins the game.
    pub const GOAL: Cell = Cell(BOARD_CELLS);

    /// Create a cell from an index known to be on the board.
    ///
    /// Panics if `index` is outside `1..=100`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index >= 1 && index <= BOARD_CELLS, "Cell index must be in 1..=100");
        Self(index)
    }

    /// Create a cell, silently clamping the index onto the board.
    ///
    /// ```
    /// use snake_ladder::board::Cell;
    ///
    /// assert_eq!(Cell::clamped(-4), Cell::START);
    /// assert_eq!(Cell::clamped(103), Cell::GOAL);
    /// assert_eq!(Cell::clamped(42).index(), 42);
    /// ```
    #[must_use]
    pub fn clamped(index: i32) -> Self {
        Self(index.clamp(1, i32::from(BOARD_CELLS)) as u8)
    }

    /// Get the 1-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Is this the goal cell?
    #[must_use]
    pub const fn is_goal(self) -> bool {
        self.0 == BOARD_CELLS
    }

    /// Iterate over every cell from start to goal.
    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=BOARD_CELLS).map(Cell)
    }
}

impl TryFrom<i32> for Cell {
    type Error = crate::error::ConfigError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        if (1..=i32::from(BOARD_CELLS)).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(crate::error::ConfigError::OffBoard(index))
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bounds() {
        assert_eq!(Cell::START.index(), 1);
        assert_eq!(Cell::GOAL.index(), 100);
        assert!(Cell::GOAL.is_goal());
        assert!(!Cell::new(99).is_goal());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Cell::clamped(0), Cell::START);
        assert_eq!(Cell::clamped(i32::MIN), Cell::START);
        assert_eq!(Cell::clamped(100), Cell::GOAL);
        assert_eq!(Cell::clamped(i32::MAX), Cell::GOAL);
        assert_eq!(Cell::clamped(57), Cell::new(57));
    }

    #[test]
    #[should_panic(expected = "Cell index must be in 1..=100")]
    fn test_new_rejects_zero() {
        let _ = Cell::new(0);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Cell::try_from(12).unwrap(), Cell::new(12));
        assert!(Cell::try_from(101).is_err());
        assert!(Cell::try_from(0).is_err());
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<_> = Cell::all().collect();
        assert_eq!(cells.len(), 100);
        assert_eq!(cells.first(), Some(&Cell::START));
        assert_eq!(cells.last(), Some(&Cell::GOAL));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Cell::new(38)).unwrap();
        assert_eq!(json, "38");
        assert_eq!(serde_json::from_str::<Cell>("38").unwrap(), Cell::new(38));
        assert!(serde_json::from_str::<Cell>("0").is_err());
    }
}
