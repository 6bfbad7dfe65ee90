//! Vertical motion of the player
//!
//! Per-tick Euler integration: gravity into velocity, velocity into position.

use super::state::Player;
use crate::consts::GROUND_Y;
use crate::tuning::Tuning;

/// Advance the player by one tick, landing on the ground if it falls through
pub fn advance(player: &mut Player, tuning: &Tuning) {
    player.vel_y += tuning.gravity;
    player.y += player.vel_y;

    if player.y > GROUND_Y {
        player.y = GROUND_Y;
        player.vel_y = 0.0;
        player.jumping = false;
    }
}

/// Start a jump unless one is already in progress. Returns true if it started.
pub fn try_jump(player: &mut Player, tuning: &Tuning) -> bool {
    if player.jumping {
        return false;
    }
    player.vel_y = tuning.jump_impulse;
    player.jumping = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resting_player_stays_put() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        advance(&mut player, &tuning);
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_jump_arc_lands() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        assert!(try_jump(&mut player, &tuning));

        advance(&mut player, &tuning);
        assert!((player.vel_y - (-14.4)).abs() < 1e-4);
        assert!((player.y - (GROUND_Y - 14.4)).abs() < 1e-3);
        assert!(player.jumping);

        let mut ticks = 1;
        while player.jumping {
            advance(&mut player, &tuning);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        // 15 / 0.6 = 25 ticks up, same back down
        assert!((49..=51).contains(&ticks), "landed after {ticks} ticks");
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        assert!(try_jump(&mut player, &tuning));
        advance(&mut player, &tuning);
        let before = player;
        assert!(!try_jump(&mut player, &tuning));
        assert_eq!(player, before);
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            jumps in proptest::collection::vec(any::<bool>(), 1..300),
            gravity in 0.1f32..3.0,
            impulse in -40.0f32..-1.0,
        ) {
            let tuning = Tuning { gravity, jump_impulse: impulse, ..Default::default() };
            let mut player = Player::default();
            for jump in jumps {
                if jump {
                    try_jump(&mut player, &tuning);
                }
                advance(&mut player, &tuning);
                prop_assert!(player.y <= GROUND_Y);
                if !player.jumping {
                    prop_assert_eq!(player.y, GROUND_Y);
                    prop_assert_eq!(player.vel_y, 0.0);
                }
            }
        }
    }
}
