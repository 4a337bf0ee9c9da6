//! Session configuration.
//!
//! The board and its rules are fixed. What a session may configure is how the
//! game is seeded and presented:
//! - `seed`: fixed dice seed, or `None` to seed from the clock
//! - `spin_frames` / `spin_interval_ms`: the cosmetic dice spin before a roll
//! - `cell_size`: pixel size of one board cell for graphical renderers

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Upper bound on spin frames, so a typo can't stall the game for minutes.
const MAX_SPIN_FRAMES: u32 = 60;

/// Settings for one game session, loadable from TOML.
///
/// ```
/// use snake_ladder::core::SessionConfig;
///
/// let config: SessionConfig = toml::from_str("seed = 7\nspin_frames = 0").unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.spin_frames, 0);
/// assert_eq!(config.cell_size, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Dice seed. `None` seeds from the system clock.
    pub seed: Option<u64>,

    /// Faces flashed before the real roll (0 disables the spin).
    pub spin_frames: u32,

    /// Delay between spin frames, in milliseconds.
    pub spin_interval_ms: u64,

    /// Pixel size of one board cell.
    pub cell_size: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spin_frames: 10,
            spin_interval_ms: 100,
            cell_size: 60,
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SessionConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_frames > MAX_SPIN_FRAMES {
            return Err(ConfigError::Validation(format!(
                "spin_frames must be <= {MAX_SPIN_FRAMES}"
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Validation("cell_size must be > 0".into()));
        }
        Ok(())
    }

    /// Set a fixed dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn the dice spin off.
    #[must_use]
    pub fn without_spin(mut self) -> Self {
        self.spin_frames = 0;
        self
    }

    /// Delay between spin frames.
    #[must_use]
    pub fn spin_interval(&self) -> Duration {
        Duration::from_millis(self.spin_interval_ms)
    }
}
