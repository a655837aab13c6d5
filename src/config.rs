//! Game configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "enemy_count": 5, "board": { "rows": 8 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Board;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: Board,
    /// Number of bugs on the board (fixed for the session)
    pub enemy_count: usize,
    /// Bug speed range in pixels/s, redrawn on every respawn
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Vertical lift of the bug sprite on its block
    pub enemy_y_offset: f32,
    /// Horizontal inset of the character inside its sprite
    pub player_x_inset: f32,
    /// RNG seed; `None` lets the runner pick one
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            enemy_count: ENEMY_COUNT,
            min_velocity: ENEMY_MIN_VELOCITY,
            max_velocity: ENEMY_MAX_VELOCITY,
            enemy_y_offset: ENEMY_Y_OFFSET,
            player_x_inset: PLAYER_X_INSET,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // A config holds only numbers and a nested struct, which always serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;

        let (min, max) = (self.min_velocity, self.max_velocity);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(ConfigError::InvalidVelocityRange { min, max });
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::NoEnemies);
        }

        let inset = self.player_x_inset;
        let block_width = self.board.block_width;
        if !inset.is_finite() || inset < 0.0 || inset >= block_width / 2.0 {
            return Err(ConfigError::InvalidInset { inset, block_width });
        }
        if !self.enemy_y_offset.is_finite() {
            return Err(ConfigError::InvalidBoard {
                reason: "enemy_y_offset must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}
