//! Pixel layout for graphical renderers.

use serde::{Deserialize, Serialize};

use crate::board::topology::coordinate;
use crate::board::{Cell, BOARD_WIDTH};
use crate::core::PlayerId;

/// Top-left corner of something on screen, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A square board drawn with `cell_size`-pixel cells, origin at top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    cell_size: u32,
}

impl BoardLayout {
    /// Layout with the given cell size in pixels.
    ///
    /// Panics if `cell_size` is zero.
    #[must_use]
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size > 0, "Cell size must be positive");
        Self { cell_size }
    }

    /// Pixel size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width and height of the whole board.
    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.cell_size * u32::from(BOARD_WIDTH)
    }

    /// Top-left corner of a cell. Row 0 is drawn at the bottom.
    #[must_use]
    pub fn cell_origin(&self, cell: Cell) -> Point {
        let coord = coordinate(cell);
        Point {
            x: u32::from(coord.column) * self.cell_size,
            y: u32::from(BOARD_WIDTH - 1 - coord.row) * self.cell_size,
        }
    }

    /// Where to draw a player's token.
    ///
    /// Player 2 sits half a cell to the right so shared cells show both.
    #[must_use]
    pub fn token_origin(&self, cell: Cell, player: PlayerId) -> Point {
        let mut point = self.cell_origin(cell);
        if player == PlayerId::TWO {
            point.x += self.cell_size / 2;
        }
        point
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(60)
    }
}
