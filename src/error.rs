//! Configuration errors

use std::fmt;

/// Errors raised while loading or validating a game configuration.
///
/// The simulation itself cannot fail; configuration is the only fallible
/// surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse { message: String },
    InvalidBoard { reason: String },
    InvalidVelocityRange { min: f32, max: f32 },
    NoEnemies,
    InvalidInset { inset: f32, block_width: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read config {path}: {message}"),
            Self::Parse { message } => write!(f, "invalid config json: {message}"),
            Self::InvalidBoard { reason } => write!(f, "invalid board: {reason}"),
            Self::InvalidVelocityRange { min, max } => write!(
                f,
                "invalid bug speed range: min={min}, max={max} (need 0 <= min <= max)"
            ),
            Self::NoEnemies => write!(f, "enemy_count must be at least 1"),
            Self::InvalidInset { inset, block_width } => write!(
                f,
                "player_x_inset {inset} must be in [0, {})",
                block_width / 2.0
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
