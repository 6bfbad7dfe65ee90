//! Tessellate a game snapshot into one vertex list
//!
//! Draw order is back to front: ground, trees, collectibles, the boy.
//! The sky is the pass clear color.

use glam::Vec2;

use super::shapes::{circle, rect};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{CollectibleKind, Snapshot};

const CIRCLE_SEGMENTS: u32 = 24;

pub fn collectible_color(kind: CollectibleKind) -> [f32; 4] {
    match kind {
        CollectibleKind::Coin => colors::COIN,
        CollectibleKind::Bill => colors::BILL,
        CollectibleKind::Pastry => colors::PASTRY,
    }
}

/// Build every vertex for one frame
pub fn build(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Ground band just under the feet line
    vertices.extend(rect(
        Vec2::new(0.0, GROUND_Y + 5.0),
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT - GROUND_Y),
        colors::GROUND,
    ));

    for &(x, y) in &snapshot.obstacles {
        tree(&mut vertices, x, y);
    }

    for &(x, y, kind) in &snapshot.collectibles {
        vertices.extend(circle(
            Vec2::new(x, y),
            COLLECTIBLE_SIZE / 2.0,
            collectible_color(kind),
            CIRCLE_SEGMENTS,
        ));
    }

    boy(&mut vertices, snapshot.player_y);

    vertices
}

/// Trunk with a round crown on top
fn tree(out: &mut Vec<Vertex>, x: f32, y: f32) {
    out.extend(rect(
        Vec2::new(x + 8.0, y),
        Vec2::new(14.0, OBSTACLE_SIZE),
        colors::TRUNK,
    ));
    out.extend(circle(
        Vec2::new(x + 15.0, y - 10.0),
        18.0,
        colors::LEAVES,
        CIRCLE_SEGMENTS,
    ));
}

/// Body, head, hair and eyes, positioned off the feet line
fn boy(out: &mut Vec<Vertex>, y: f32) {
    let cx = PLAYER_X;
    out.extend(rect(Vec2::new(cx - 12.0, y), Vec2::new(24.0, 20.0), colors::SHIRT));
    out.extend(circle(Vec2::new(cx, y - 18.0), 11.0, colors::SKIN, CIRCLE_SEGMENTS));
    out.extend(circle(Vec2::new(cx, y - 24.0), 11.0, colors::HAIR, CIRCLE_SEGMENTS));
    // Redraw the lower face so the hair only covers the top
    out.extend(rect(Vec2::new(cx - 11.0, y - 18.0), Vec2::new(22.0, 11.0), colors::SKIN));
    out.extend(circle(Vec2::new(cx - 4.0, y - 19.0), 2.0, colors::EYES, 8));
    out.extend(circle(Vec2::new(cx + 4.0, y - 19.0), 2.0, colors::EYES, 8));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    const GROUND_VERTS: usize = 6;
    const TREE_VERTS: usize = 6 + 3 * CIRCLE_SEGMENTS as usize;
    const COLLECTIBLE_VERTS: usize = 3 * CIRCLE_SEGMENTS as usize;
    const BOY_VERTS: usize = 6 + 6 + 2 * 3 * CIRCLE_SEGMENTS as usize + 2 * 3 * 8;

    #[test]
    fn test_empty_scene_has_ground_and_boy() {
        let snap = GameState::new(1, Tuning::default()).snapshot();
        assert_eq!(build(&snap).len(), GROUND_VERTS + BOY_VERTS);
    }

    #[test]
    fn test_entities_add_geometry() {
        let mut snap = GameState::new(1, Tuning::default()).snapshot();
        snap.obstacles.push((400.0, OBSTACLE_Y));
        snap.collectibles.push((600.0, COLLECTIBLE_Y, CollectibleKind::Coin));
        snap.collectibles.push((700.0, COLLECTIBLE_Y, CollectibleKind::Pastry));

        let verts = build(&snap);
        assert_eq!(
            verts.len(),
            GROUND_VERTS + TREE_VERTS + 2 * COLLECTIBLE_VERTS + BOY_VERTS
        );
        assert!(verts.iter().any(|v| v.color == colors::COIN));
        assert!(verts.iter().any(|v| v.color == colors::PASTRY));
    }

    #[test]
    fn test_boy_follows_player_height() {
        let mut snap = GameState::new(1, Tuning::default()).snapshot();
        let grounded = build(&snap);
        snap.player_y = GROUND_Y - 100.0;
        let airborne = build(&snap);

        let top = |verts: &[Vertex]| {
            verts
                .iter()
                .filter(|v| v.color == colors::HAIR)
                .map(|v| v.position[1])
                .fold(f32::MAX, f32::min)
        };
        assert!((top(&grounded) - top(&airborne) - 100.0).abs() < 1e-3);
    }
}
