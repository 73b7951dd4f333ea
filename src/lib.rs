//! Courier Dash - a tile-based side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: deterministic simulation (physics, collision, session progression)
//! - `level`: level geometry and the text-grid loader
//! - `timer`: wall-clock level countdown
//! - `camera`: world-to-screen math for the renderer
//! - `stats`: persisted run statistics

pub mod camera;
pub mod level;
pub mod sim;
pub mod stats;
pub mod timer;

pub use level::{Collectible, CollectibleKind, Level, LevelError, Tile};
pub use stats::Stats;
pub use timer::Timer;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Side length of one grid cell in world units
    pub const GRID_CELL_SIZE: f32 = 16.0;

    /// Player hitbox (width, height)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 11.0);

    /// Gravity added to the player's velocity once per tick
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.5);

    /// Upward velocity granted by one jump
    pub const JUMP_STRENGTH: f32 = 7.0;
    /// Jumps available between ground contacts (allows a double jump)
    pub const MAX_JUMPS: u32 = 2;

    /// Horizontal speed at full input deflection
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Divisor applied to vx each tick while landing with no input held
    pub const FRICTION_DIVISOR: f32 = 1.5;
    /// Below this |vx|, friction snaps the player to a stop
    pub const FRICTION_EPSILON: f32 = 0.05;

    /// Fail-safe: a player below this y has fallen through the world
    pub const OUT_OF_BOUNDS_Y: f32 = 2000.0;

    /// Time budget for one session
    pub const LEVEL_TIME_LIMIT_SECS: u64 = 300;

    /// Score value of each second left on the clock after a win
    pub const SECOND_VALUE: u32 = 10;
    /// Score value of each collected dollar
    pub const DOLLAR_VALUE: u32 = 100;

    /// Viewport the camera exposes to the renderer
    pub const VIEWPORT_WIDTH: f32 = 320.0;
    pub const VIEWPORT_HEIGHT: f32 = 240.0;
}
