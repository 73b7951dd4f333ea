//! Gravity and collision resolution
//!
//! One moving body against static axis-aligned tiles and trigger volumes.
//! Tiles resolve one at a time in level order. Each axis corrects
//! independently, gated on the body's current overlap on the other axis, so
//! a diagonal approach at a corner corrects neither axis instead of catching.

use crate::consts::{FRICTION_DIVISOR, FRICTION_EPSILON, GRAVITY, MAX_JUMPS};
use crate::level::{Collectible, Tile};
use crate::sim::state::PlayerBody;

/// Outcome of resolving the player against one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileHit {
    /// No predicted overlap
    Miss,
    /// Overlap handled by snapping position and zeroing velocity
    Solid,
    /// The tile is deadly; the caller restarts the attempt
    Deadly,
}

/// Add gravity to the player's velocity. Once per tick, unconditionally.
pub fn apply_gravity(player: &mut PlayerBody) {
    player.velocity += GRAVITY;
}

/// Resolve the player against one static tile.
///
/// The broad phase advances the hitbox by the pending velocity; touching
/// edges do not count as overlap. Deadly tiles report without resolving.
/// Vertical resolution runs before horizontal. `input_held` suppresses
/// landing friction while a horizontal command is active.
pub fn resolve_tile(player: &mut PlayerBody, tile: &Tile, input_held: bool) -> TileHit {
    let t = tile.position;
    let ts = tile.size;

    // Will the hitbox overlap the tile on the next frame?
    if !(player.position.x + player.size.x + player.velocity.x > t.x
        && player.position.x + player.velocity.x < t.x + ts.x
        && player.position.y + player.size.y + player.velocity.y > t.y
        && player.position.y + player.velocity.y < t.y + ts.y)
    {
        return TileHit::Miss;
    }

    if tile.deadly {
        return TileHit::Deadly;
    }

    // Vertical, gated on the current horizontal overlap
    if player.position.x + player.size.x > t.x && player.position.x < t.x + ts.x {
        if player.position.y < t.y
            && player.position.y + player.size.y + player.velocity.y.ceil() > t.y
        {
            // Bottom hits the tile top: land, refill the jump pool
            if !input_held {
                if player.velocity.x.abs() > FRICTION_EPSILON {
                    player.velocity.x /= FRICTION_DIVISOR;
                } else {
                    player.velocity.x = 0.0;
                }
            }
            player.velocity.y = 0.0;
            player.position.y = t.y - player.size.y;
            player.jump_charges = MAX_JUMPS;
        } else if player.position.y + player.size.y > t.y + ts.y
            && player.position.y + player.velocity.y.ceil() < t.y + ts.y
        {
            // Top hits the tile bottom
            player.velocity.y = 0.0;
            player.position.y = t.y + ts.y;
        }
    }

    // Horizontal, gated on the current vertical overlap. Left face checked
    // first; a tile narrower than the player resolves to its left side.
    if player.position.y + player.size.y > t.y && player.position.y < t.y + ts.y {
        if player.position.x < t.x
            && player.position.x + player.size.x + player.velocity.x.ceil() > t.x
        {
            player.velocity.x = 0.0;
            player.position.x = t.x - player.size.x;
        } else if player.position.x + player.size.x > t.x + ts.x
            && player.position.x + player.velocity.x.ceil() < t.x + ts.x
        {
            player.velocity.x = 0.0;
            player.position.x = t.x + ts.x;
        }
    }

    TileHit::Solid
}

/// Plain current-hitbox overlap with a trigger volume; no velocity lookahead
pub fn collectible_overlap(player: &PlayerBody, collectible: &Collectible) -> bool {
    player.position.x + player.size.x > collectible.position.x
        && player.position.x < collectible.position.x + collectible.size.x
        && player.position.y + player.size.y > collectible.position.y
        && player.position.y < collectible.position.y + collectible.size.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::CollectibleKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn tile_at(x: f32, y: f32) -> Tile {
        Tile {
            position: Vec2::new(x, y),
            size: Vec2::splat(16.0),
            deadly: false,
        }
    }

    fn player_at(x: f32, y: f32, vx: f32, vy: f32) -> PlayerBody {
        let mut player = PlayerBody::new(Vec2::new(x, y));
        player.velocity = Vec2::new(vx, vy);
        player
    }

    #[test]
    fn test_gravity_increment() {
        let mut player = player_at(0.0, 0.0, 0.0, 0.0);
        apply_gravity(&mut player);
        apply_gravity(&mut player);
        assert_eq!(player.velocity.y, 1.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_landing_snaps_and_refills_jumps() {
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(100.0, 84.0, 0.0, 6.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Solid);
        assert_eq!(player.position.y, 89.0); // 100 - 11
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.jump_charges, MAX_JUMPS);
    }

    #[test]
    fn test_slow_approach_misses_until_it_would_cross() {
        // Bottom at 95, falling 4: next frame's bottom is 99, still above
        // the tile top at 100.
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(100.0, 84.0, 0.0, 4.0);

        assert_eq!(resolve_tile(&mut player, &tile, false), TileHit::Miss);
        assert_eq!(player.position.y, 84.0);
        assert_eq!(player.velocity.y, 4.0);
    }

    #[test]
    fn test_ceiling_snaps_top_to_tile_bottom() {
        let tile = tile_at(100.0, 100.0);
        // Top at 118, rising 4: would cross the tile bottom at 116.
        let mut player = player_at(100.0, 118.0, 0.0, -4.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Solid);
        assert_eq!(player.position.y, 116.0);
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.jump_charges, 0);
    }

    #[test]
    fn test_wall_from_the_left() {
        let tile = tile_at(100.0, 100.0);
        // Right edge at 96, moving right 5, currently overlapping vertically.
        let mut player = player_at(80.0, 104.0, 5.0, 0.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Solid);
        assert_eq!(player.position.x, 84.0); // 100 - 16
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_wall_from_the_right() {
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(120.0, 104.0, -5.0, 0.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Solid);
        assert_eq!(player.position.x, 116.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_corner_approach_corrects_neither_axis() {
        // Diagonal approach with no current overlap on either axis: the
        // broad phase fires but both gates hold, so nothing snaps.
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(80.0, 85.0, 6.0, 6.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Solid);
        assert_eq!(player.position, Vec2::new(80.0, 85.0));
        assert_eq!(player.velocity, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn test_deadly_tile_reports_without_resolving() {
        let mut tile = tile_at(100.0, 100.0);
        tile.deadly = true;
        let mut player = player_at(100.0, 80.0, 0.0, 10.0);

        let hit = resolve_tile(&mut player, &tile, false);

        assert_eq!(hit, TileHit::Deadly);
        assert_eq!(player.position, Vec2::new(100.0, 80.0));
        assert_eq!(player.velocity, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_landing_friction_decays_then_snaps() {
        // Resting on the tile with one tick of gravity pending.
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(100.0, 89.0, 3.0, 1.0);

        resolve_tile(&mut player, &tile, false);
        assert_eq!(player.velocity.x, 2.0);

        player.velocity.y = 1.0;
        resolve_tile(&mut player, &tile, false);
        assert!((player.velocity.x - 2.0 / 1.5).abs() < 1e-6);

        player.velocity.x = 0.04; // below the epsilon
        player.velocity.y = 1.0;
        resolve_tile(&mut player, &tile, false);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_held_input_overrides_friction() {
        let tile = tile_at(100.0, 100.0);
        let mut player = player_at(100.0, 89.0, 3.0, 1.0);

        resolve_tile(&mut player, &tile, true);

        assert_eq!(player.velocity.x, 3.0);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_collectible_overlap_is_strict() {
        let collectible = Collectible {
            position: Vec2::new(50.0, 50.0),
            size: Vec2::splat(16.0),
            kind: CollectibleKind::Currency,
            collected: false,
        };

        let player = player_at(50.0, 50.0, 0.0, 0.0);
        assert!(collectible_overlap(&player, &collectible));

        // Touching edges do not count.
        let player = player_at(34.0, 50.0, 0.0, 0.0);
        assert!(!collectible_overlap(&player, &collectible));
    }

    proptest! {
        /// Gravity changes vy by exactly G, nothing else.
        #[test]
        fn prop_gravity_adds_exactly_g(vx in -20.0f32..20.0, vy in -20.0f32..20.0) {
            let mut player = player_at(0.0, 0.0, vx, vy);
            apply_gravity(&mut player);
            prop_assert_eq!(player.velocity.y, vy + GRAVITY.y);
            prop_assert_eq!(player.velocity.x, vx);
        }

        /// A player falling onto a tile from above never ends a tick with
        /// its bottom strictly below the tile top, for any pending fall
        /// speed smaller than the tile height.
        #[test]
        fn prop_no_tunneling_through_thin_floors(
            gap in 0.0f32..50.0,
            vy in 0.01f32..15.99,
        ) {
            let tile = tile_at(100.0, 100.0);
            let mut player = player_at(100.0, 100.0 - 11.0 - gap, 0.0, vy);

            resolve_tile(&mut player, &tile, false);
            player.position += player.velocity;

            // 1e-4 absorbs the rounding difference between the broad-phase
            // sum and this one.
            prop_assert!(player.position.y + player.size.y <= tile.position.y + 1e-4);
        }
    }
}
