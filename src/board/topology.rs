//! Board topology: where each cell sits on the 10x10 grid.
//!
//! Cells snake across the board. Row 0 (the bottom row) runs left to right,
//! row 1 runs right to left, and so on up to row 9 which holds the goal.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Cells per row (and rows per board).
pub const BOARD_WIDTH: u8 = 10;

/// A grid position. Rows count from the bottom, columns from the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub column: u8,
    pub row: u8,
}

/// Grid position of a cell index.
///
/// Out-of-range indices are clamped onto the board first.
///
/// ```
/// use snake_ladder::board::{position_of, BoardCoordinate};
///
/// assert_eq!(position_of(1), BoardCoordinate { column: 0, row: 0 });
/// assert_eq!(position_of(11), BoardCoordinate { column: 9, row: 1 });
/// assert_eq!(position_of(250), position_of(100));
/// ```
#[must_use]
pub fn position_of(cell_index: i32) -> BoardCoordinate {
    coordinate(Cell::clamped(cell_index))
}

/// Grid position of a cell.
#[must_use]
pub fn coordinate(cell: Cell) -> BoardCoordinate {
    let offset = cell.index() - 1;
    let row = offset / BOARD_WIDTH;
    let mut column = offset % BOARD_WIDTH;
    if row % 2 == 1 {
        column = BOARD_WIDTH - 1 - column;
    }
    BoardCoordinate { column, row }
}

/// Inverse of [`coordinate`]. Returns `None` off the grid.
#[must_use]
pub fn cell_at(coord: BoardCoordinate) -> Option<Cell> {
    if coord.column >= BOARD_WIDTH || coord.row >= BOARD_WIDTH {
        return None;
    }
    let column = if coord.row % 2 == 1 {
        BOARD_WIDTH - 1 - coord.column
    } else {
        coord.column
    };
    Some(Cell::new(coord.row * BOARD_WIDTH + column + 1))
}
