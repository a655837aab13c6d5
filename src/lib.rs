//! Bug Runner - a lane-crossing arcade game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board geometry, enemies, player, collisions)
//! - `input`: Keyboard-to-direction mapping and the input command queue
//! - `render`: Render contract between the simulation and a drawing backend
//! - `config`: Data-driven game configuration
//! - `autopilot`: Demo input source for the headless runner

pub mod autopilot;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use input::{Direction, InputQueue};

/// Game configuration constants
pub mod consts {
    /// Block (grid cell) dimensions in pixels
    pub const BLOCK_WIDTH: f32 = 101.0;
    pub const BLOCK_HEIGHT: f32 = 83.0;

    /// Grid dimensions
    pub const NUM_ROWS: u32 = 6;
    pub const NUM_COLUMNS: u32 = 5;
    /// Grass rows at the bottom of the board (start row included)
    pub const SAFE_ROWS: u32 = 2;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 3;
    pub const ENEMY_MIN_VELOCITY: f32 = 200.0; // pixels/s
    pub const ENEMY_MAX_VELOCITY: f32 = 600.0; // pixels/s
    /// Lifts the bug sprite so it sits centered on its stone block
    pub const ENEMY_Y_OFFSET: f32 = 20.0;

    /// Horizontal inset of the character inside its sprite, used for hit tests
    pub const PLAYER_X_INSET: f32 = 20.0;

    /// Nominal frame delta for the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the runner will feed the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp a frame delta to something the simulation can use.
///
/// Negative deltas become zero and NaN/infinite deltas are treated as zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}
