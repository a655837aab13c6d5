//! The player character
//!
//! The player lives on the grid: its row/column are authoritative and its
//! pixel position is always derived from them. It moves one cell per
//! directional command and never moves on its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::collision::{CollisionSide, first_collision};
use super::enemy::Enemy;
use crate::consts::PLAYER_X_INSET;
use crate::input::Direction;

/// What a directional command did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No direction (unmapped key)
    Ignored,
    /// The move would leave the board
    Blocked,
    /// The player moved one cell
    Moved,
    /// The player stepped onto the goal row and was sent back to start
    ReachedGoal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    row: i32,
    column: i32,
    pos: Vec2,
    /// Horizontal inset of the character inside its sprite (hit tests only)
    pub x_inset: f32,
}

impl Player {
    pub fn new(board: &Board) -> Self {
        Self::with_inset(board, PLAYER_X_INSET)
    }

    pub fn with_inset(board: &Board, x_inset: f32) -> Self {
        let mut player = Self {
            row: 0,
            column: 0,
            pos: Vec2::ZERO,
            x_inset,
        };
        player.set_initial_position(board);
        player
    }

    /// Back to the start cell: bottom row, center column
    pub fn set_initial_position(&mut self, board: &Board) {
        self.row = board.start_row();
        self.column = board.center_column();
        self.pos = Vec2::new(board.cell_x(self.column), board.cell_y(self.row));
    }

    /// Apply one directional command. Moves off the board are ignored.
    pub fn handle_input(&mut self, direction: Option<Direction>, board: &Board) -> MoveOutcome {
        let Some(direction) = direction else {
            return MoveOutcome::Ignored;
        };

        match direction {
            Direction::Left => {
                if self.column <= 0 {
                    return MoveOutcome::Blocked;
                }
                self.column -= 1;
                self.pos.x = board.cell_x(self.column);
            }
            Direction::Right => {
                if self.column >= board.last_column() {
                    return MoveOutcome::Blocked;
                }
                self.column += 1;
                self.pos.x = board.cell_x(self.column);
            }
            Direction::Down => {
                if self.row >= board.start_row() {
                    return MoveOutcome::Blocked;
                }
                self.row += 1;
                self.pos.y = board.cell_y(self.row);
            }
            Direction::Up => {
                if self.row <= board.goal_row() {
                    return MoveOutcome::Blocked;
                }
                self.row -= 1;
                if self.row == board.goal_row() {
                    // The win is momentary: the player never rests on the water.
                    self.set_initial_position(board);
                    return MoveOutcome::ReachedGoal;
                }
                self.pos.y = board.cell_y(self.row);
            }
        }
        MoveOutcome::Moved
    }

    /// Per-tick collision check against the (already advanced) enemies.
    ///
    /// `dt` is unused: the player only moves on input. On the first hit the
    /// player is reset to the start cell and the enemy's index is returned.
    pub fn update(
        &mut self,
        _dt: f32,
        enemies: &[Enemy],
        board: &Board,
    ) -> Option<(usize, CollisionSide)> {
        let hit = first_collision(self, enemies, board)?;
        self.set_initial_position(board);
        Some(hit)
    }

    /// Place the player on a cell (clamped to the board)
    pub fn place(&mut self, board: &Board, row: i32, column: i32) {
        self.row = row.clamp(0, board.start_row());
        self.column = column.clamp(0, board.last_column());
        self.pos = Vec2::new(board.cell_x(self.column), board.cell_y(self.row));
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

    pub fn is_at_start(&self, board: &Board) -> bool {
        self.row == board.start_row() && self.column == board.center_column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn assert_on_grid(player: &Player, board: &Board) {
        assert_eq!(player.x(), board.block_width * player.column() as f32);
        assert_eq!(player.y(), board.block_height * player.row() as f32);
    }

    #[test]
    fn test_initial_position() {
        let board = Board::default();
        let player = Player::new(&board);
        assert_eq!(player.row(), 5);
        assert_eq!(player.column(), 2);
        assert_eq!(player.pos(), Vec2::new(2.0 * BLOCK_WIDTH, 5.0 * BLOCK_HEIGHT));
        assert!(player.is_at_start(&board));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let board = Board::default();
        let mut player = Player::new(&board);
        player.place(&board, 2, 0);
        player.set_initial_position(&board);
        let first = player.clone();
        player.set_initial_position(&board);
        assert_eq!(player, first);
        assert!(player.is_at_start(&board));
    }

    #[test]
    fn test_moves_update_pixels() {
        let board = Board::default();
        let mut player = Player::new(&board);

        assert_eq!(player.handle_input(Some(Direction::Left), &board), MoveOutcome::Moved);
        assert_eq!(player.column(), 1);
        assert_on_grid(&player, &board);

        assert_eq!(player.handle_input(Some(Direction::Up), &board), MoveOutcome::Moved);
        assert_eq!(player.row(), 4);
        assert_on_grid(&player, &board);

        assert_eq!(player.handle_input(Some(Direction::Right), &board), MoveOutcome::Moved);
        assert_eq!(player.handle_input(Some(Direction::Down), &board), MoveOutcome::Moved);
        assert!(player.is_at_start(&board));
        assert_on_grid(&player, &board);
    }

    #[test]
    fn test_edges_block_movement() {
        let board = Board::default();
        let mut player = Player::new(&board);

        player.place(&board, 3, 0);
        let before = player.clone();
        assert_eq!(player.handle_input(Some(Direction::Left), &board), MoveOutcome::Blocked);
        assert_eq!(player, before);

        player.place(&board, 3, board.last_column());
        let before = player.clone();
        assert_eq!(player.handle_input(Some(Direction::Right), &board), MoveOutcome::Blocked);
        assert_eq!(player, before);

        player.set_initial_position(&board);
        let before = player.clone();
        assert_eq!(player.handle_input(Some(Direction::Down), &board), MoveOutcome::Blocked);
        assert_eq!(player, before);
    }

    #[test]
    fn test_unmapped_input_is_ignored() {
        let board = Board::default();
        let mut player = Player::new(&board);
        let before = player.clone();
        assert_eq!(player.handle_input(None, &board), MoveOutcome::Ignored);
        assert_eq!(player, before);
    }

    #[test]
    fn test_reaching_water_resets() {
        let board = Board::default();
        let mut player = Player::new(&board);
        player.place(&board, 1, 4);

        assert_eq!(player.handle_input(Some(Direction::Up), &board), MoveOutcome::ReachedGoal);
        assert!(player.is_at_start(&board));
        assert_on_grid(&player, &board);
    }

    #[test]
    fn test_walk_to_goal_from_start() {
        let board = Board::default();
        let mut player = Player::new(&board);
        let mut outcomes = Vec::new();
        for _ in 0..board.start_row() {
            outcomes.push(player.handle_input(Some(Direction::Up), &board));
        }
        assert_eq!(outcomes.last(), Some(&MoveOutcome::ReachedGoal));
        assert!(outcomes[..outcomes.len() - 1]
            .iter()
            .all(|o| *o == MoveOutcome::Moved));
        assert!(player.is_at_start(&board));
    }
}
