//! Deterministic simulation module
//!
//! All gameplay logic lives here. One tick equals one call to [`tick::tick`],
//! driven by an external loop; nothing in this module draws, polls input, or
//! blocks. Tiles and collectibles resolve in level-load order.

pub mod physics;
pub mod state;
pub mod tick;

pub use physics::{TileHit, apply_gravity, collectible_overlap, resolve_tile};
pub use state::{Outcome, PlayerBody, SessionPhase, SessionState};
pub use tick::{TickInput, tick};
