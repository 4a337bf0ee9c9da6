//! Dice rolling.
//!
//! The rules engine never draws randomness itself. Callers hand it values
//! obtained from a `DiceRoller`, which makes the source injectable:
//!
//! - `Die`: a fair six-sided die backed by `GameRng`
//! - `ScriptedDice`: replays a fixed list of values (tests, replays)

use std::collections::VecDeque;

use tracing::debug;

use crate::core::rng::DIE_FACES;
use crate::core::GameRng;

/// Source of dice values.
///
/// Implementations must return values in `1..=6`.
pub trait DiceRoller {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl<D: DiceRoller + ?Sized> DiceRoller for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die.
#[derive(Clone, Debug)]
pub struct Die {
    rng: GameRng,
}

impl Die {
    /// A die with a fixed seed. Same seed, same rolls.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// A die seeded once from the system clock.
    #[must_use]
    pub fn from_time() -> Self {
        let rng = GameRng::from_time();
        debug!(seed = rng.seed(), "seeded die from clock");
        Self { rng }
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Split off an independent RNG stream.
    ///
    /// Draws from the fork never change the die's own sequence.
    #[must_use]
    pub fn fork(&mut self) -> GameRng {
        self.rng.fork()
    }
}

impl DiceRoller for Die {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die()
    }
}

/// Dice that replay a fixed sequence of values, then start over.
///
/// Values are not range-checked, so scripts can feed deliberately bad
/// rolls to the engine.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create dice from a non-empty script.
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: VecDeque<u8> = values.into_iter().collect();
        assert!(!values.is_empty(), "Dice script must not be empty");
        Self { values }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.values[0];
        self.values.rotate_left(1);
        value
    }
}

/// Is `value` a face of the die?
#[must_use]
pub fn is_face(value: u32) -> bool {
    (1..=u32::from(DIE_FACES)).contains(&value)
}
