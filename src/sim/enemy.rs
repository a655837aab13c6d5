//! Enemy bugs
//!
//! A bug runs left to right along a single stone lane at a constant speed.
//! Once it has fully left the right edge of the board it respawns in place:
//! same entity, new random lane, new random speed, back off the left edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::*;

/// A bug entity
///
/// `column` and `pos.y` are derived from `pos.x` and `row`; they are only
/// ever recomputed, never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    row: i32,
    column: i32,
    pos: Vec2,
    /// Horizontal speed in pixels/s
    velocity: f32,
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Vertical lift that centers the sprite on its block
    y_offset: f32,
}

impl Enemy {
    /// Create a bug with the default speed range and spawn it
    ///
    /// # Panics
    ///
    /// Panics if the board has no lane rows; check it with `Board::validate` first.
    pub fn new<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Self {
        Self::with_tuning(
            board,
            ENEMY_MIN_VELOCITY,
            ENEMY_MAX_VELOCITY,
            ENEMY_Y_OFFSET,
            rng,
        )
    }

    /// Create a bug with explicit tuning and spawn it
    ///
    /// # Panics
    ///
    /// Panics if the board has no lane rows; check it with `Board::validate` first.
    pub fn with_tuning<R: Rng + ?Sized>(
        board: &Board,
        min_velocity: f32,
        max_velocity: f32,
        y_offset: f32,
        rng: &mut R,
    ) -> Self {
        debug_assert!(board.validate().is_ok(), "bug spawned on an invalid board");
        let mut enemy = Self {
            row: board.goal_row(),
            column: -1,
            pos: Vec2::ZERO,
            velocity: min_velocity,
            min_velocity,
            max_velocity,
            y_offset,
        };
        enemy.set_initial_position(board, rng);
        enemy
    }

    /// (Re)spawn: random lane, random speed, fully off the left edge
    ///
    /// # Panics
    ///
    /// Panics if the board has no lane rows.
    pub fn set_initial_position<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        self.row = rng.random_range(board.lane_rows());
        self.column = -1;
        self.pos = Vec2::new(-board.block_width, self.lane_y(board));
        self.velocity =
            self.min_velocity + (self.max_velocity - self.min_velocity) * rng.random::<f32>();
    }

    /// Advance by `dt` seconds. Returns true if the bug left the board and
    /// respawned during this call.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, board: &Board, rng: &mut R) -> bool {
        self.pos.x += self.velocity * dt;
        self.column = board.column_at(self.pos.x);

        if self.column > board.last_column() {
            self.set_initial_position(board, rng);
            return true;
        }
        false
    }

    /// Put the bug at pixel `x` on `row`, recomputing derived state
    pub fn place(&mut self, board: &Board, row: i32, x: f32) {
        self.row = row;
        self.pos = Vec2::new(x, 0.0);
        self.pos.y = self.lane_y(board);
        self.column = board.column_at(x);
    }

    /// Override the current speed (until the next respawn)
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn column(&self) -> i32 {
        self.column
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    /// Whether the bug is currently over the board
    pub fn on_board(&self, board: &Board) -> bool {
        (0..=board.last_column()).contains(&self.column)
    }

    fn lane_y(&self, board: &Board) -> f32 {
        board.cell_y(self.row) - self.y_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_invariants(enemy: &Enemy, board: &Board) {
        assert_eq!(enemy.y(), board.block_height * enemy.row() as f32 - enemy.y_offset());
        assert_eq!(enemy.column(), (enemy.x() / board.block_width).floor() as i32);
    }

    #[test]
    fn test_spawn_off_left_edge() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let enemy = Enemy::new(&board, &mut rng);

        assert!(board.is_lane(enemy.row()));
        assert_eq!(enemy.column(), -1);
        assert_eq!(enemy.x(), -BLOCK_WIDTH);
        assert!(enemy.velocity() >= ENEMY_MIN_VELOCITY);
        assert!(enemy.velocity() <= ENEMY_MAX_VELOCITY);
        assert!(!enemy.on_board(&board));
        assert_invariants(&enemy, &board);
    }

    #[test]
    fn test_respawn_twice_stays_valid() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut enemy = Enemy::new(&board, &mut rng);

        enemy.set_initial_position(&board, &mut rng);
        assert!(board.is_lane(enemy.row()));
        assert_invariants(&enemy, &board);

        enemy.set_initial_position(&board, &mut rng);
        assert!(board.is_lane(enemy.row()));
        assert_eq!(enemy.x(), -BLOCK_WIDTH);
        assert_invariants(&enemy, &board);
    }

    #[test]
    fn test_update_moves_right() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemy = Enemy::new(&board, &mut rng);
        enemy.place(&board, 2, 0.0);
        enemy.set_velocity(300.0);

        let respawned = enemy.update(0.5, &board, &mut rng);
        assert!(!respawned);
        assert_eq!(enemy.x(), 150.0);
        assert_eq!(enemy.column(), 1);
        assert_eq!(enemy.row(), 2);
        assert_invariants(&enemy, &board);
    }

    #[test]
    fn test_update_respawns_past_right_edge() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut enemy = Enemy::new(&board, &mut rng);
        enemy.place(&board, 1, board.pixel_width() - 1.0);
        enemy.set_velocity(600.0);

        let respawned = enemy.update(0.1, &board, &mut rng);
        assert!(respawned);
        assert_eq!(enemy.x(), -BLOCK_WIDTH);
        assert_eq!(enemy.column(), -1);
        assert!(board.is_lane(enemy.row()));
        assert_invariants(&enemy, &board);
    }

    #[test]
    fn test_last_column_does_not_respawn() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut enemy = Enemy::new(&board, &mut rng);
        enemy.place(&board, 3, board.cell_x(board.last_column()));
        enemy.set_velocity(100.0);

        assert!(!enemy.update(0.5, &board, &mut rng));
        assert_eq!(enemy.column(), board.last_column());
    }

    #[test]
    fn test_y_tracks_lane_across_updates() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(13);
        let mut enemy = Enemy::with_tuning(&board, 300.0, 300.0, 5.0, &mut rng);
        enemy.place(&board, 1, 0.0);

        enemy.update(0.01, &board, &mut rng);
        assert_eq!(enemy.y(), board.cell_y(1) - 5.0);
        assert_eq!(enemy.y_offset(), 5.0);
        assert_invariants(&enemy, &board);
    }

    #[test]
    #[should_panic]
    fn test_laneless_board_panics() {
        let board = Board {
            rows: 3,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let _ = Enemy::new(&board, &mut rng);
    }

    #[test]
    fn test_fixed_speed_range() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let enemy = Enemy::with_tuning(&board, 250.0, 250.0, 10.0, &mut rng);
        assert_eq!(enemy.velocity(), 250.0);
        assert_eq!(enemy.y(), board.cell_y(enemy.row()) - 10.0);
    }
}
