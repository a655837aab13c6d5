//! Game state and core simulation types
//!
//! The driver owns one `GameState` for the whole session. Enemies are
//! allocated once at construction and respawned in place; the player is
//! reset in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::collision::CollisionSide;
use super::enemy::Enemy;
use super::player::{MoveOutcome, Player};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::Direction;

/// Pending events kept for the presentation layer; older ones are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Side-channel events for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player reached the water and was sent back to start
    Win,
    /// A bug hit the player, who was sent back to start
    Collision { enemy: usize, side: CollisionSide },
    /// A bug left the board and respawned
    EnemyRespawned { enemy: usize, row: i32, velocity: f32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub board: Board,
    /// Bugs, in update/collision order
    pub enemies: Vec<Enemy>,
    pub player: Player,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total simulated time in seconds
    pub elapsed: f64,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a default game with the given seed
    pub fn new(seed: u64) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..Default::default()
        };
        Self::build(&config, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a game from a configuration, validating it first.
    ///
    /// A config without a seed uses seed 0.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_default();
        Ok(Self::build(config, seed, Pcg32::seed_from_u64(seed)))
    }

    /// Create a game with an injected RNG
    pub fn with_rng(config: &GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, config.seed.unwrap_or_default(), rng))
    }

    fn build(config: &GameConfig, seed: u64, mut rng: Pcg32) -> Self {
        let board = config.board;
        let enemies = (0..config.enemy_count)
            .map(|_| {
                Enemy::with_tuning(
                    &board,
                    config.min_velocity,
                    config.max_velocity,
                    config.enemy_y_offset,
                    &mut rng,
                )
            })
            .collect();
        let player = Player::with_inset(&board, config.player_x_inset);

        log::debug!(
            "New game: seed {}, {}x{} board, {} bugs",
            seed,
            board.columns,
            board.rows,
            config.enemy_count
        );

        Self {
            seed,
            board,
            enemies,
            player,
            time_ticks: 0,
            elapsed: 0.0,
            rng,
            events: Vec::new(),
        }
    }

    /// Apply a directional command to the player immediately
    pub fn handle_input(&mut self, direction: Option<Direction>) -> MoveOutcome {
        let outcome = self.player.handle_input(direction, &self.board);
        if outcome == MoveOutcome::ReachedGoal {
            log::info!("Bingo! Player reached the water");
            self.push_event(GameEvent::Win);
        }
        outcome
    }

    /// Apply queued commands in arrival order
    pub fn apply_inputs<I>(&mut self, directions: I)
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in directions {
            self.handle_input(Some(direction));
        }
    }

    /// Respawn every bug and send the player back to start
    pub fn restart(&mut self) {
        for enemy in &mut self.enemies {
            enemy.set_initial_position(&self.board, &mut self.rng);
        }
        self.player.set_initial_position(&self.board);
        self.events.clear();
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Events not yet consumed, oldest first (at most `MAX_PENDING_EVENTS`)
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand pending events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
