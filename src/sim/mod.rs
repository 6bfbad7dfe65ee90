//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame counter step)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collectible_box, obstacle_box, player_box};
pub use spawn::KindPicker;
pub use state::{
    Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Obstacle, Player, Snapshot,
};
pub use tick::{TickInput, tick};
