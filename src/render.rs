//! Render contract
//!
//! Drawing belongs to the embedding application. The simulation only
//! promises that every entity has a finite pixel position and a fixed
//! sprite name; a `Canvas` resolves the sprite and draws it.

use glam::Vec2;

use crate::sim::{Enemy, GameState, Player};

pub const ENEMY_SPRITE: &str = "images/enemy-bug.png";
pub const PLAYER_SPRITE: &str = "images/char-boy.png";

/// Anything the renderer can draw
pub trait Sprite {
    /// Asset name, resolved by the drawing backend
    fn sprite(&self) -> &'static str;
    /// Top-left corner in pixels
    fn position(&self) -> Vec2;
}

impl Sprite for Enemy {
    fn sprite(&self) -> &'static str {
        ENEMY_SPRITE
    }

    fn position(&self) -> Vec2 {
        self.pos()
    }
}

impl Sprite for Player {
    fn sprite(&self) -> &'static str {
        PLAYER_SPRITE
    }

    fn position(&self) -> Vec2 {
        self.pos()
    }
}

/// External drawing capability
pub trait Canvas {
    fn draw_image(&mut self, sprite: &str, pos: Vec2);
}

/// Draw all bugs, then the player on top
pub fn render(state: &GameState, canvas: &mut impl Canvas) {
    for enemy in &state.enemies {
        draw(enemy, canvas);
    }
    draw(&state.player, canvas);
}

fn draw(entity: &impl Sprite, canvas: &mut impl Canvas) {
    let pos = entity.position();
    debug_assert!(pos.is_finite(), "{} at non-finite {pos}", entity.sprite());
    canvas.draw_image(entity.sprite(), pos);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub sprite: &'static str,
    pub pos: Vec2,
}

/// Canvas that records draw calls instead of drawing
#[derive(Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for DrawList {
    fn draw_image(&mut self, sprite: &str, pos: Vec2) {
        let sprite = match sprite {
            ENEMY_SPRITE => ENEMY_SPRITE,
            PLAYER_SPRITE => PLAYER_SPRITE,
            _ => "unknown",
        };
        self.calls.push(DrawCall { sprite, pos });
    }
}

/// Text view of the board: `~` water, `=` stone lane, `"` grass,
/// `B` bug, `@` player.
pub fn ascii_board(state: &GameState) -> String {
    let board = &state.board;
    let mut rows: Vec<Vec<char>> = (0..board.rows as i32)
        .map(|row| {
            let tile = if row == board.goal_row() {
                '~'
            } else if board.is_lane(row) {
                '='
            } else {
                '"'
            };
            vec![tile; board.columns as usize]
        })
        .collect();

    for enemy in state.enemies.iter().filter(|e| e.on_board(board)) {
        rows[enemy.row() as usize][enemy.column() as usize] = 'B';
    }
    let player = &state.player;
    rows[player.row() as usize][player.column() as usize] = '@';

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
