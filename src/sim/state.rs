//! Game state and core simulation types
//!
//! A `GameState` is one run. Restarting never mutates it back to zero; the
//! driver swaps in a brand new one built by `GameState::new`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Hit an obstacle; frozen until reset
    GameOver,
}

/// The runner character. Only the vertical axis moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Feet position (world units, y down)
    pub y: f32,
    /// Vertical velocity (units/tick, negative is up)
    pub vel_y: f32,
    pub jumping: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: GROUND_Y,
            vel_y: 0.0,
            jumping: false,
        }
    }
}

/// A tree on the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
}

impl Obstacle {
    /// New obstacle entering at the right screen edge
    pub fn at_right_edge() -> Self {
        Self {
            x: SCREEN_WIDTH,
            y: OBSTACLE_Y,
        }
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Bill,
    Pastry,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Coin,
        CollectibleKind::Bill,
        CollectibleKind::Pastry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectibleKind::Coin => "coin",
            CollectibleKind::Bill => "bill",
            CollectibleKind::Pastry => "pastry",
        }
    }
}

/// Something to pick up for score or currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

impl Collectible {
    /// New collectible entering at the right screen edge
    pub fn at_right_edge(kind: CollectibleKind) -> Self {
        Self {
            x: SCREEN_WIDTH,
            y: COLLECTIBLE_Y,
            kind,
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Collected(CollectibleKind),
    Crashed,
    /// A fresh session replaced a finished one
    Restarted,
}

/// Read-only view of a session handed to the renderer and HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_y: f32,
    pub jumping: bool,
    pub obstacles: Vec<(f32, f32)>,
    pub collectibles: Vec<(f32, f32, CollectibleKind)>,
    pub score: u64,
    pub currency: u64,
    pub frame: u64,
    pub game_over: bool,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source for collectible kinds
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub score: u64,
    pub currency: u64,
    /// Ticks simulated this run
    pub frame: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            currency: 0,
            frame: 0,
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
        }
    }

    /// Build the run that follows this one (same tuning, derived seed)
    pub fn next_session(&self) -> Self {
        let seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        Self::new(seed, self.tuning.clone())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_y: self.player.y,
            jumping: self.player.jumping,
            obstacles: self.obstacles.iter().map(|o| (o.x, o.y)).collect(),
            collectibles: self
                .collectibles
                .iter()
                .map(|c| (c.x, c.y, c.kind))
                .collect(),
            score: self.score,
            currency: self.currency,
            frame: self.frame,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_zeroed() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.currency, 0);
        assert_eq!(state.frame, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player, Player::default());
        assert_eq!(state.player.y, GROUND_Y);
    }

    #[test]
    fn test_next_session_keeps_tuning_changes_seed() {
        let tuning = Tuning {
            scroll_speed: 12.0,
            ..Default::default()
        };
        let mut state = GameState::new(42, tuning.clone());
        state.score = 99;
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle::at_right_edge());

        let next = state.next_session();
        assert_eq!(next.tuning, tuning);
        assert_ne!(next.seed, state.seed);
        assert_eq!(next.score, 0);
        assert_eq!(next.phase, GamePhase::Running);
        assert!(next.obstacles.is_empty());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(1, Tuning::default());
        state.obstacles.push(Obstacle { x: 400.0, y: OBSTACLE_Y });
        state
            .collectibles
            .push(Collectible::at_right_edge(CollectibleKind::Bill));
        state.currency = 50;

        let snap = state.snapshot();
        assert_eq!(snap.obstacles, vec![(400.0, OBSTACLE_Y)]);
        assert_eq!(
            snap.collectibles,
            vec![(SCREEN_WIDTH, COLLECTIBLE_Y, CollectibleKind::Bill)]
        );
        assert_eq!(snap.currency, 50);
        assert!(!snap.game_over);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"Bill\""));
    }
}
