//! Snakes and ladders.
//!
//! A `JumpTable` maps entry cells to destination cells. Landing on a snake's
//! head sends a token down; landing on a ladder's foot sends it up.
//!
//! Tables are validated once at construction:
//! - no cell is both a snake and a ladder
//! - snakes lead down, ladders lead up
//! - no destination is itself an entry (a move takes at most one jump)
//! - the goal never starts a jump

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::error::ConfigError;

const STANDARD_SNAKES: [(i32, i32); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (87, 36),
    (64, 60),
    (93, 73),
    (95, 75),
    (98, 79),
];

// 1 -> 38 can never be landed on since play starts there. Kept as shipped.
const STANDARD_LADDERS: [(i32, i32); 8] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (28, 84),
    (21, 42),
    (51, 67),
    (80, 99),
    (72, 91),
];

/// Which way a jump goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    Snake,
    Ladder,
}

/// A single snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub kind: JumpKind,
    pub from: Cell,
    pub to: Cell,
}

/// Immutable snake and ladder lookup.
///
/// ## Example
///
/// ```
/// use snake_ladder::board::{Cell, JumpTable};
///
/// let table = JumpTable::standard();
///
/// assert_eq!(table.resolve(Cell::new(17)), Cell::new(7));  // snake
/// assert_eq!(table.resolve(Cell::new(4)), Cell::new(14));  // ladder
/// assert_eq!(table.resolve(Cell::new(5)), Cell::new(5));   // plain cell
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpTable {
    snakes: FxHashMap<Cell, Cell>,
    ladders: FxHashMap<Cell, Cell>,
}

impl JumpTable {
    /// Build and validate a table from `(from, to)` pairs.
    pub fn new(snakes: &[(i32, i32)], ladders: &[(i32, i32)]) -> Result<Self, ConfigError> {
        let snakes = collect_pairs(snakes)?;
        let ladders = collect_pairs(ladders)?;

        for (&from, &to) in &snakes {
            if to >= from {
                return Err(ConfigError::SnakeGoesUp { from, to });
            }
        }
        for (&from, &to) in &ladders {
            if to <= from {
                return Err(ConfigError::LadderGoesDown { from, to });
            }
            if snakes.contains_key(&from) {
                return Err(ConfigError::DuplicateJump { cell: from });
            }
        }

        let table = Self { snakes, ladders };
        if table.jump_at(Cell::GOAL).is_some() {
            return Err(ConfigError::JumpFromGoal);
        }
        for jump in table.jumps() {
            if table.jump_at(jump.to).is_some() {
                return Err(ConfigError::ChainedJump {
                    from: jump.from,
                    to: jump.to,
                });
            }
        }

        Ok(table)
    }

    /// The board every game is played on.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&STANDARD_SNAKES, &STANDARD_LADDERS)
            .expect("standard jump table is valid")
    }

    /// A board with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Where a token landing on `cell` ends up.
    ///
    /// Applies at most one jump. Snakes are checked before ladders.
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> Cell {
        self.jump_at(cell).map_or(cell, |jump| jump.to)
    }

    /// The jump starting at `cell`, if any.
    #[must_use]
    pub fn jump_at(&self, cell: Cell) -> Option<Jump> {
        if let Some(&to) = self.snakes.get(&cell) {
            return Some(Jump { kind: JumpKind::Snake, from: cell, to });
        }
        self.ladders
            .get(&cell)
            .map(|&to| Jump { kind: JumpKind::Ladder, from: cell, to })
    }

    /// All jumps, ordered by entry cell.
    #[must_use]
    pub fn jumps(&self) -> Vec<Jump> {
        let snakes = self
            .snakes
            .iter()
            .map(|(&from, &to)| Jump { kind: JumpKind::Snake, from, to });
        let ladders = self
            .ladders
            .iter()
            .map(|(&from, &to)| Jump { kind: JumpKind::Ladder, from, to });

        let mut jumps: Vec<_> = snakes.chain(ladders).collect();
        jumps.sort_by_key(|jump| jump.from);
        jumps
    }

    /// Number of snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }
}

impl Default for JumpTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn collect_pairs(pairs: &[(i32, i32)]) -> Result<FxHashMap<Cell, Cell>, ConfigError> {
    let mut map = FxHashMap::default();
    for &(from, to) in pairs {
        let from = Cell::try_from(from)?;
        let to = Cell::try_from(to)?;
        if map.insert(from, to).is_some() {
            return Err(ConfigError::DuplicateJump { cell: from });
        }
    }
    Ok(map)
}
