//! Directional commands and the input queue
//!
//! The embedding application translates key-up events into `Direction`s and
//! pushes them onto an `InputQueue`; the driver drains the queue between
//! ticks and hands the commands to the player in arrival order.

use serde::{Deserialize, Serialize};

/// Key codes of the arrow keys (DOM `keyCode` values)
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Map an arrow key code; any other key is unmapped
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }

    pub fn key_code(&self) -> u32 {
        match self {
            Direction::Left => KEY_LEFT,
            Direction::Up => KEY_UP,
            Direction::Right => KEY_RIGHT,
            Direction::Down => KEY_DOWN,
        }
    }
}

/// Pending directional commands, oldest first
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    commands: Vec<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, direction: Direction) {
        self.commands.push(direction);
    }

    /// Record a key-up event. Unmapped keys are dropped.
    pub fn push_key_up(&mut self, key_code: u32) -> bool {
        match Direction::from_key_code(key_code) {
            Some(direction) => {
                self.push(direction);
                true
            }
            None => false,
        }
    }

    /// Take all pending commands and clear the queue
    pub fn drain(&mut self) -> Vec<Direction> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
