//! Collision detection and scoring
//!
//! Everything is an axis-aligned box in screen space (y down). The player
//! column is fixed; obstacles and collectibles scroll into it.

use glam::Vec2;

use super::state::{Collectible, GameEvent, GamePhase, GameState, Obstacle, Player};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Player hitbox, standing on its feet at `player.y`
pub fn player_box(player: &Player) -> Aabb {
    Aabb::new(PLAYER_X, player.y - PLAYER_SIZE, PLAYER_SIZE, PLAYER_SIZE)
}

pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(obstacle.x, obstacle.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
}

pub fn collectible_box(collectible: &Collectible) -> Aabb {
    Aabb::new(
        collectible.x,
        collectible.y,
        COLLECTIBLE_SIZE,
        COLLECTIBLE_SIZE,
    )
}

/// Scroll obstacles and check them against the player.
///
/// A hit ends the run but leaves the obstacle where it is so the final frame
/// shows the crash. Obstacles past `DESPAWN_X` are dropped.
pub fn obstacle_pass(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let speed = state.tuning.scroll_speed;
    let player = player_box(&state.player);
    let mut crashed = false;

    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
        if player.overlaps(&obstacle_box(obstacle)) {
            crashed = true;
        }
    }
    state.obstacles.retain(|o| o.x >= DESPAWN_X);

    if crashed && state.phase == GamePhase::Running {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Crashed);
        log::info!(
            "Crashed at frame {} (score {}, currency {})",
            state.frame,
            state.score,
            state.currency
        );
    }
}

/// Scroll collectibles, pay out the ones the player touches, drop the rest
/// once they leave the screen.
pub fn collectible_pass(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let speed = state.tuning.scroll_speed;
    let rewards = state.tuning.rewards;
    let player = player_box(&state.player);
    let (mut score, mut currency) = (0, 0);

    state.collectibles.retain_mut(|c| {
        c.x -= speed;
        if player.overlaps(&collectible_box(c)) {
            let reward = rewards.get(c.kind);
            currency += reward.currency;
            score += reward.score;
            events.push(GameEvent::Collected(c.kind));
            log::debug!(
                "Collected {} (+{} currency, +{} score)",
                c.kind.as_str(),
                reward.currency,
                reward.score
            );
            false
        } else {
            c.x >= DESPAWN_X
        }
    });

    state.score += score;
    state.currency += currency;
}
