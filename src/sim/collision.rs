//! Bug/player hit test
//!
//! Bugs only travel left to right, so a bug can only touch the player from
//! the column to its left or from inside the player's own column. The test
//! checks just those two columns, comparing the bug's full block span with
//! the player's span inset by `x_inset` on each side.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::enemy::Enemy;
use super::player::Player;

/// Which of the two hit cases fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionSide {
    /// Bug is one column left of the player and its right edge reached the
    /// player's inset left edge
    FromLeft,
    /// Bug is in the player's column and its left edge has not passed the
    /// player's inset right edge
    SameColumn,
}

/// Check a single bug against the player
pub fn check_collision(enemy: &Enemy, player: &Player, board: &Board) -> Option<CollisionSide> {
    if enemy.row() != player.row() {
        return None;
    }

    let width = board.block_width;
    if enemy.column() == player.column() - 1 && enemy.x() + width >= player.x() + player.x_inset {
        return Some(CollisionSide::FromLeft);
    }
    if enemy.column() == player.column() && enemy.x() <= player.x() + width - player.x_inset {
        return Some(CollisionSide::SameColumn);
    }
    None
}

/// First bug (in collection order) touching the player
pub fn first_collision(
    player: &Player,
    enemies: &[Enemy],
    board: &Board,
) -> Option<(usize, CollisionSide)> {
    enemies
        .iter()
        .enumerate()
        .find_map(|(i, enemy)| check_collision(enemy, player, board).map(|side| (i, side)))
}
