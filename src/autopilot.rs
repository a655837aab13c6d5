//! Idle/demo mode - a simple bot that plays the game
//!
//! The bot hops up whenever the cell above stays clear of bugs for a short
//! look-ahead window, sidesteps when its own cell is about to be hit, and
//! otherwise waits. It only uses the public simulation API.

use crate::input::Direction;
use crate::sim::{GameState, check_collision};

/// How far ahead (seconds) the bot projects bug motion
pub const LOOKAHEAD_SECS: f32 = 0.35;
const LOOKAHEAD_SAMPLES: u32 = 8;

/// Whether a player standing on (row, column) would stay unhit for `horizon` seconds
pub fn cell_is_safe(state: &GameState, row: i32, column: i32, horizon: f32) -> bool {
    let board = &state.board;
    if row == board.goal_row() {
        // Reaching the water resets the player before any bug can matter.
        return true;
    }

    let mut probe = state.player.clone();
    probe.place(board, row, column);

    state
        .enemies
        .iter()
        .filter(|enemy| enemy.row() == row)
        .all(|enemy| {
            (0..=LOOKAHEAD_SAMPLES).all(|i| {
                let t = horizon * i as f32 / LOOKAHEAD_SAMPLES as f32;
                let mut ghost = enemy.clone();
                ghost.place(board, row, enemy.x() + enemy.velocity() * t);
                check_collision(&ghost, &probe, board).is_none()
            })
        })
}

/// Pick the next command for the current state, or `None` to wait
pub fn choose_move(state: &GameState) -> Option<Direction> {
    let board = &state.board;
    let (row, column) = (state.player.row(), state.player.column());

    if cell_is_safe(state, row - 1, column, LOOKAHEAD_SECS) {
        return Some(Direction::Up);
    }
    if cell_is_safe(state, row, column, LOOKAHEAD_SECS) {
        return None;
    }

    [Direction::Down, Direction::Right, Direction::Left]
        .into_iter()
        .find(|direction| {
            let (r, c) = match direction {
                Direction::Down => (row + 1, column),
                Direction::Right => (row, column + 1),
                Direction::Left => (row, column - 1),
                Direction::Up => (row - 1, column),
            };
            board.contains(r, c) && cell_is_safe(state, r, c, LOOKAHEAD_SECS)
        })
}

/// Bot that issues at most one command every `move_interval` ticks
#[derive(Debug, Clone)]
pub struct Autopilot {
    move_interval: u32,
    cooldown: u32,
}

impl Autopilot {
    pub fn new(move_interval: u32) -> Self {
        Self {
            move_interval: move_interval.max(1),
            cooldown: 0,
        }
    }

    pub fn next_move(&mut self, state: &GameState) -> Option<Direction> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        let choice = choose_move(state);
        if choice.is_some() {
            self.cooldown = self.move_interval - 1;
        }
        choice
    }
}
