//! Per-tick orchestration
//!
//! One tick = one call to [`tick`], driven by an external fixed-rate loop.
//! Within a tick the order is fixed: gravity, input, tiles, collectibles,
//! integration, bounds check, clock check. Later steps read state the
//! earlier ones mutate, so the order must not change.

use crate::consts::{JUMP_STRENGTH, OUT_OF_BOUNDS_Y, PLAYER_SPEED};
use crate::level::{CollectibleKind, LevelError};
use crate::sim::physics::{self, TileHit};
use crate::sim::state::{Outcome, SessionPhase, SessionState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held horizontal command in [-1, 1]; `None` while nothing is held,
    /// which lets landing friction act
    pub move_x: Option<f32>,
    /// Jump edge event; consumes one charge
    pub jump: bool,
}

/// Advance the session by one tick.
///
/// Only `Playing` and `LevelAdvance` do work; a pending advance loads the
/// next level here so a failed load surfaces to the caller.
pub fn tick(session: &mut SessionState, input: &TickInput) -> Result<(), LevelError> {
    match session.phase {
        SessionPhase::Playing => {}
        SessionPhase::LevelAdvance => return session.advance_level(),
        _ => return Ok(()),
    }

    physics::apply_gravity(&mut session.player);

    // Ingest this tick's input
    if let Some(command) = input.move_x {
        session.player.velocity.x = command.clamp(-1.0, 1.0) * PLAYER_SPEED;
    }
    if input.jump && session.player.jump_charges > 0 {
        session.player.velocity.y = -JUMP_STRENGTH;
        session.player.jump_charges -= 1;
    }
    let input_held = input.move_x.is_some();

    // Tiles, in level order. Hazard contact abandons the rest of the tick's
    // collision work; the level geometry no longer matters to this attempt.
    let mut restarted = false;
    for tile in &session.level.tiles {
        if physics::resolve_tile(&mut session.player, tile, input_held) == TileHit::Deadly {
            restarted = true;
            break;
        }
    }

    if restarted {
        session.restart_level();
    } else {
        for collectible in session.level.collectibles.iter_mut() {
            if !physics::collectible_overlap(&session.player, collectible) {
                continue;
            }
            match collectible.kind {
                CollectibleKind::Currency if !collectible.collected => {
                    collectible.collected = true;
                    session.score += 1;
                    session.level.dollars_left -= 1;
                }
                CollectibleKind::Currency | CollectibleKind::Decoration => {}
                CollectibleKind::Exit => {
                    if session.level.dollars_left == 0 {
                        session.phase = SessionPhase::LevelAdvance;
                        break;
                    }
                }
            }
        }
    }

    // Integrate
    session.player.position += session.player.velocity;

    // Fail-safe against fall-through-world bugs, not a game mechanic
    if session.player.position.y > OUT_OF_BOUNDS_Y {
        log::error!("player out of bounds at y={}", session.player.position.y);
        session.running = false;
    }

    if session.timer.remaining() < 0.0 {
        session.game_over(Outcome::Lose);
    }

    Ok(())
}
