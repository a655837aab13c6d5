//! Board geometry and grid/pixel coordinate math
//!
//! The board is a grid of `rows` x `columns` blocks:
//! - row 0 is the water (goal) row
//! - rows `1 ..= rows - 1 - safe_rows` are stone lanes where the bugs run
//! - the bottom `safe_rows` rows are grass; the last one is the start row
//!
//! Grid indices are `i32` because an enemy's column is -1 before it enters
//! the board and past the last column once it leaves.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Immutable board geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    /// Block width in pixels
    pub block_width: f32,
    /// Block height in pixels
    pub block_height: f32,
    /// Number of rows (goal row and start row included)
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
    /// Grass rows at the bottom, start row included
    pub safe_rows: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            rows: NUM_ROWS,
            columns: NUM_COLUMNS,
            safe_rows: SAFE_ROWS,
        }
    }
}

impl Board {
    /// The water row. Stepping onto it wins the crossing.
    #[inline]
    pub fn goal_row(&self) -> i32 {
        0
    }

    /// Row the player starts (and restarts) on
    #[inline]
    pub fn start_row(&self) -> i32 {
        self.rows as i32 - 1
    }

    #[inline]
    pub fn last_column(&self) -> i32 {
        self.columns as i32 - 1
    }

    /// Center column, rounded down
    #[inline]
    pub fn center_column(&self) -> i32 {
        (self.columns / 2) as i32
    }

    /// Rows enemies may spawn on
    pub fn lane_rows(&self) -> RangeInclusive<i32> {
        let last_lane = self.rows as i32 - 1 - self.safe_rows as i32;
        1..=last_lane
    }

    pub fn lane_count(&self) -> usize {
        let lanes = self.lane_rows();
        (*lanes.end() - *lanes.start() + 1).max(0) as usize
    }

    pub fn is_lane(&self, row: i32) -> bool {
        self.lane_rows().contains(&row)
    }

    /// Column containing pixel `x` (may be negative or past the last column)
    #[inline]
    pub fn column_at(&self, x: f32) -> i32 {
        (x / self.block_width).floor() as i32
    }

    /// Left pixel edge of a column
    #[inline]
    pub fn cell_x(&self, column: i32) -> f32 {
        self.block_width * column as f32
    }

    /// Top pixel edge of a row
    #[inline]
    pub fn cell_y(&self, row: i32) -> f32 {
        self.block_height * row as f32
    }

    pub fn pixel_width(&self) -> f32 {
        self.block_width * self.columns as f32
    }

    pub fn pixel_height(&self) -> f32 {
        self.block_height * self.rows as f32
    }

    /// Whether a grid cell lies on the board
    pub fn contains(&self, row: i32, column: i32) -> bool {
        (0..self.rows as i32).contains(&row) && (0..self.columns as i32).contains(&column)
    }

    /// Check that the geometry can host a game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| {
            Err(ConfigError::InvalidBoard {
                reason: reason.to_string(),
            })
        };

        if !(self.block_width.is_finite() && self.block_width > 0.0) {
            return invalid("block_width must be a positive number");
        }
        if !(self.block_height.is_finite() && self.block_height > 0.0) {
            return invalid("block_height must be a positive number");
        }
        if self.columns == 0 {
            return invalid("board needs at least one column");
        }
        if self.safe_rows == 0 {
            return invalid("board needs a start row (safe_rows >= 1)");
        }
        if self.rows < self.safe_rows + 2 {
            return invalid("board needs a goal row and at least one lane row");
        }
        Ok(())
    }
}
