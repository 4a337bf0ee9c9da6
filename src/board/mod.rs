//! The 100-cell board: cell indices, grid topology, and the jump table.
//!
//! - `cell`: `Cell`, a board index that is always within 1..=100
//! - `topology`: serpentine mapping from cells to grid coordinates
//! - `jumps`: snakes and ladders

pub mod cell;
pub mod topology;
pub mod jumps;

pub use cell::{Cell, BOARD_CELLS};
pub use topology::{cell_at, position_of, BoardCoordinate, BOARD_WIDTH};
pub use jumps::{Jump, JumpKind, JumpTable};
