//! Frame-counter driven spawning
//!
//! When something spawns is fully deterministic; which collectible appears
//! comes from a `KindPicker`.

use rand::Rng;

use super::state::{Collectible, CollectibleKind, Obstacle};
use crate::tuning::Tuning;

/// Source of collectible kinds
pub trait KindPicker {
    fn pick(&mut self) -> CollectibleKind;
}

/// Any RNG picks uniformly over all kinds
impl<R: Rng> KindPicker for R {
    fn pick(&mut self) -> CollectibleKind {
        CollectibleKind::ALL[self.random_range(0..CollectibleKind::ALL.len())]
    }
}

/// Append an obstacle at the right edge on obstacle frames.
/// Returns true if one was spawned.
pub fn maybe_spawn_obstacle(frame: u64, tuning: &Tuning, obstacles: &mut Vec<Obstacle>) -> bool {
    if frame % tuning.obstacle_interval != 0 {
        return false;
    }
    obstacles.push(Obstacle::at_right_edge());
    log::debug!("frame {frame}: obstacle spawned");
    true
}

/// Append a collectible at the right edge on collectible frames.
/// Returns the kind spawned, if any.
pub fn maybe_spawn_collectible(
    frame: u64,
    tuning: &Tuning,
    collectibles: &mut Vec<Collectible>,
    picker: &mut impl KindPicker,
) -> Option<CollectibleKind> {
    if frame % tuning.collectible_interval != 0 {
        return None;
    }
    let kind = picker.pick();
    collectibles.push(Collectible::at_right_edge(kind));
    log::debug!("frame {frame}: {} spawned", kind.as_str());
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Always(CollectibleKind);

    impl KindPicker for Always {
        fn pick(&mut self) -> CollectibleKind {
            self.0
        }
    }

    #[test]
    fn test_obstacle_cadence() {
        let tuning = Tuning::default();
        let mut obstacles = Vec::new();
        let mut spawned = Vec::new();
        for frame in 1..=300 {
            if maybe_spawn_obstacle(frame, &tuning, &mut obstacles) {
                spawned.push(frame);
            }
        }
        assert_eq!(spawned, vec![100, 200, 300]);
        assert!(obstacles
            .iter()
            .all(|o| o.x == SCREEN_WIDTH && o.y == OBSTACLE_Y));
    }

    #[test]
    fn test_collectible_cadence() {
        let tuning = Tuning::default();
        let mut collectibles = Vec::new();
        let mut picker = Always(CollectibleKind::Pastry);
        let mut spawned = Vec::new();
        for frame in 1..=450 {
            if maybe_spawn_collectible(frame, &tuning, &mut collectibles, &mut picker).is_some() {
                spawned.push(frame);
            }
        }
        assert_eq!(spawned, vec![150, 300, 450]);
        assert_eq!(collectibles.len(), 3);
        assert!(collectibles
            .iter()
            .all(|c| c.kind == CollectibleKind::Pastry && c.y == COLLECTIBLE_Y));
    }

    #[test]
    fn test_rng_picks_every_kind() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut seen = [0usize; 3];
        for _ in 0..300 {
            let kind = rng.pick();
            let idx = CollectibleKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] += 1;
        }
        // Uniform over three: each should land well clear of zero
        assert!(seen.iter().all(|&n| n > 50), "skewed picks: {seen:?}");
    }
}
