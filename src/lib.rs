//! Petit Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `runner`: Fixed timestep driver state, input events, session swapping
//! - `tuning`: Data-driven game balance
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Web Audio sound effects (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use runner::{InputEvent, Runner};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical screen size (world units, origin top-left, y down)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Feet line of the player; nothing sinks below it
    pub const GROUND_Y: f32 = 300.0;

    /// Player physics defaults (per tick, not per second)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Player hitbox: fixed column, anchored at the feet
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Obstacles (trees) sit on the ground
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_Y: f32 = GROUND_Y - OBSTACLE_SIZE;

    /// Collectibles float at head height
    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    pub const COLLECTIBLE_Y: f32 = GROUND_Y - 50.0;

    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 8.0;
    /// Entities left of this are gone for good
    pub const DESPAWN_X: f32 = -50.0;

    /// Spawn and scoring cadence (in frames)
    pub const OBSTACLE_INTERVAL: u64 = 100;
    pub const COLLECTIBLE_INTERVAL: u64 = 150;
    pub const SCORE_INTERVAL: u64 = 10;

    /// Rewards
    pub const COIN_CURRENCY: u64 = 15;
    pub const BILL_CURRENCY: u64 = 50;
    pub const PASTRY_SCORE: u64 = 10;
}
