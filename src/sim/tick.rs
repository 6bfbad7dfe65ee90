//! Fixed timestep simulation tick
//!
//! Core game loop that advances one run deterministically.

use super::collision::{collectible_pass, obstacle_pass};
use super::physics;
use super::spawn::{maybe_spawn_collectible, maybe_spawn_obstacle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PLAYER_X;

/// How far ahead of the player the autopilot starts its jump
const AUTOPILOT_LOOKAHEAD: f32 = 90.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested this tick (space / up)
    pub jump: bool,
    /// Idle/demo mode - jumps over obstacles on its own
    pub autopilot: bool,
}

/// Advance the run by one tick and report what happened.
///
/// Order: frame counter and passive score, jump input, physics, obstacles,
/// collectibles, then spawning. A finished run does not move.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.frame += 1;
    if state.frame % state.tuning.score_interval == 0 {
        state.score += 1;
    }

    let wants_jump = input.jump || (input.autopilot && autopilot_should_jump(state));
    if wants_jump && physics::try_jump(&mut state.player, &state.tuning) {
        events.push(GameEvent::Jumped);
    }
    physics::advance(&mut state.player, &state.tuning);

    obstacle_pass(state, &mut events);
    collectible_pass(state, &mut events);

    maybe_spawn_obstacle(state.frame, &state.tuning, &mut state.obstacles);
    maybe_spawn_collectible(
        state.frame,
        &state.tuning,
        &mut state.collectibles,
        &mut state.rng,
    );

    events
}

/// Jump when the nearest obstacle still ahead of the player is close
fn autopilot_should_jump(state: &GameState) -> bool {
    state
        .obstacles
        .iter()
        .map(|o| o.x - PLAYER_X)
        .filter(|dx| *dx > 0.0)
        .any(|dx| dx <= AUTOPILOT_LOOKAHEAD)
}
