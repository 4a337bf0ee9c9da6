//! A playable game session: dice plus turn engine.

use tracing::{debug, warn};

use crate::board::JumpTable;
use crate::core::{SessionConfig, Snapshot};
use crate::dice::{DiceRoller, Die};
use crate::error::RollError;
use crate::render::{BoardLayout, DiceSpin};
use crate::rules::{MoveOutcome, TurnEngine};

/// Drives one game for an event loop.
///
/// The loop calls [`GameSession::request_roll`] whenever the user asks to
/// roll, then hands [`GameSession::snapshot`] to its renderer.
#[derive(Clone, Debug)]
pub struct GameSession<D: DiceRoller = Die> {
    engine: TurnEngine,
    dice: D,
    config: SessionConfig,
}

impl GameSession<Die> {
    /// Start a session on the standard board.
    ///
    /// Uses `config.seed` if set, otherwise seeds the die from the clock.
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        let die = match config.seed {
            Some(seed) => Die::seeded(seed),
            None => Die::from_time(),
        };
        debug!(seed = die.seed(), "starting session");
        Self::with_dice(JumpTable::standard(), die, config)
    }

    /// Cosmetic faces to flash before the next roll.
    ///
    /// Drawn from a fork of the die, so spinning never changes which
    /// values the game itself rolls.
    pub fn spin(&mut self) -> DiceSpin {
        DiceSpin::new(self.dice.fork(), self.config.spin_frames)
    }

    /// Seed of the session's die, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.dice.seed()
    }
}

impl<D: DiceRoller> GameSession<D> {
    /// Start a session with explicit dice and board.
    #[must_use]
    pub fn with_dice(jumps: JumpTable, dice: D, config: SessionConfig) -> Self {
        Self {
            engine: TurnEngine::new(jumps),
            dice,
            config,
        }
    }

    /// Roll for the player to move and apply the result.
    ///
    /// Once the game is over the dice are not touched and the request is
    /// rejected with [`RollError::GameOver`].
    pub fn request_roll(&mut self) -> Result<MoveOutcome, RollError> {
        if let Some(winner) = self.engine.winner() {
            warn!(%winner, "roll requested after game over");
            return Err(RollError::GameOver { winner });
        }
        let value = self.dice.roll();
        self.engine.apply_roll(u32::from(value))
    }

    /// Throw away the current game and start over on the same board.
    ///
    /// The dice keep their stream, so a restarted game plays differently.
    pub fn restart(&mut self) {
        let jumps = self.engine.jumps().clone();
        self.engine = TurnEngine::new(jumps);
        debug!("session restarted");
    }

    /// Current state for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    /// Pixel layout for graphical renderers, sized by `cell_size`.
    ///
    /// Panics if `cell_size` is zero; `SessionConfig::validate` rejects that.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.config.cell_size)
    }
}
