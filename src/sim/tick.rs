//! Per-frame simulation tick
//!
//! One tick = advance every bug in collection order, then run the player's
//! collision check against the already-advanced bugs. Rendering happens
//! afterwards, outside the simulation.

use super::state::{GameEvent, GameState};
use crate::sanitize_dt;

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, dt: f32) {
    let clean_dt = sanitize_dt(dt);
    if clean_dt != dt {
        log::warn!("Frame delta {dt} is not usable, advancing by {clean_dt}");
    }
    let dt = clean_dt;

    state.time_ticks += 1;
    state.elapsed += f64::from(dt);

    let board = state.board;
    let mut respawns = Vec::new();
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        if enemy.update(dt, &board, &mut state.rng) {
            log::debug!(
                "Bug {} respawned on row {} at {:.0} px/s",
                i,
                enemy.row(),
                enemy.velocity()
            );
            respawns.push(GameEvent::EnemyRespawned {
                enemy: i,
                row: enemy.row(),
                velocity: enemy.velocity(),
            });
        }
    }
    for event in respawns {
        state.push_event(event);
    }

    if let Some((enemy, side)) = state.player.update(dt, &state.enemies, &board) {
        log::info!("Bug {enemy} hit the player ({side:?}), back to start");
        state.push_event(GameEvent::Collision { enemy, side });
    }
}
