//! Data-driven game balance
//!
//! Defaults reproduce the classic feel. A JSON file may override any subset
//! of fields; missing fields keep their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CollectibleKind;

/// What a collectible is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    pub currency: u64,
    pub score: u64,
}

/// Reward per collectible kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub coin: Reward,
    pub bill: Reward,
    pub pastry: Reward,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            coin: Reward {
                currency: COIN_CURRENCY,
                score: 0,
            },
            bill: Reward {
                currency: BILL_CURRENCY,
                score: 0,
            },
            pastry: Reward {
                currency: 0,
                score: PASTRY_SCORE,
            },
        }
    }
}

impl RewardTable {
    pub fn get(&self, kind: CollectibleKind) -> Reward {
        match kind {
            CollectibleKind::Coin => self.coin,
            CollectibleKind::Bill => self.bill,
            CollectibleKind::Pastry => self.pastry,
        }
    }
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units/tick²)
    pub gravity: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_impulse: f32,
    /// Leftward scroll of obstacles and collectibles (units/tick)
    pub scroll_speed: f32,
    /// Frames between obstacle spawns
    pub obstacle_interval: u64,
    /// Frames between collectible spawns
    pub collectible_interval: u64,
    /// Frames between passive +1 score
    pub score_interval: u64,
    pub rewards: RewardTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            obstacle_interval: OBSTACLE_INTERVAL,
            collectible_interval: COLLECTIBLE_INTERVAL,
            score_interval: SCORE_INTERVAL,
            rewards: RewardTable::default(),
        }
    }
}

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning JSON: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(TuningError::Invalid(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return Err(TuningError::Invalid(format!(
                "jump_impulse must be negative (up), got {}",
                self.jump_impulse
            )));
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            return Err(TuningError::Invalid(format!(
                "scroll_speed must be positive, got {}",
                self.scroll_speed
            )));
        }
        for (name, value) in [
            ("obstacle_interval", self.obstacle_interval),
            ("collectible_interval", self.collectible_interval),
            ("score_interval", self.score_interval),
        ] {
            if value == 0 {
                return Err(TuningError::Invalid(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_constants() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.jump_impulse, -15.0);
        assert_eq!(t.scroll_speed, 8.0);
        assert_eq!(t.obstacle_interval, 100);
        assert_eq!(t.collectible_interval, 150);
        assert_eq!(t.score_interval, 10);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_reward_table() {
        let rewards = RewardTable::default();
        assert_eq!(rewards.get(CollectibleKind::Coin), Reward { currency: 15, score: 0 });
        assert_eq!(rewards.get(CollectibleKind::Bill), Reward { currency: 50, score: 0 });
        assert_eq!(rewards.get(CollectibleKind::Pastry), Reward { currency: 0, score: 10 });
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json(r#"{ "scroll_speed": 10.0, "rewards": { "bill": { "currency": 100, "score": 1 } } }"#)
            .unwrap();
        assert_eq!(t.scroll_speed, 10.0);
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.rewards.bill, Reward { currency: 100, score: 1 });
        assert_eq!(t.rewards.coin.currency, COIN_CURRENCY);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "obstacle_interval": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "jump_impulse": 4.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
        assert!(err.to_string().starts_with("failed to read tuning file"));
    }
}
