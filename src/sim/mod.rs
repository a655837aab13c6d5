//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (enemy collection order)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod state;
pub mod tick;

pub use board::Board;
pub use collision::{CollisionSide, check_collision, first_collision};
pub use enemy::Enemy;
pub use player::{MoveOutcome, Player};
pub use state::{GameEvent, GameState, MAX_PENDING_EVENTS};
pub use tick::tick;
