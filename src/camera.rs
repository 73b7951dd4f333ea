//! World-to-screen math for the renderer
//!
//! Pure arithmetic; drawing is the front end's business. The camera keeps
//! its target centered and never shows anything past the level's play
//! limit.

use glam::Vec2;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Top-left corner of the visible window, in world units
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    origin: Vec2,
}

impl Camera {
    fn viewport() -> Vec2 {
        Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }

    /// Center the view on a target's hitbox, clamped to the playable area
    pub fn follow(&mut self, target: Vec2, target_size: Vec2, play_limit: Vec2) {
        let centered = target + target_size / 2.0 - Self::viewport() / 2.0;
        let max = (play_limit - Self::viewport()).max(Vec2::ZERO);
        self.origin = centered.clamp(Vec2::ZERO, max);
    }

    /// Screen position of a world position under this camera
    pub fn screen_position(&self, world: Vec2) -> Vec2 {
        world - self.origin
    }

    /// Whether a sprite of the given size is visible at all
    pub fn is_in_frame(&self, world: Vec2, size: Vec2) -> bool {
        let screen = self.screen_position(world);
        !(screen.x + size.x < 0.0
            || screen.x > VIEWPORT_WIDTH
            || screen.y + size.y < 0.0
            || screen.y > VIEWPORT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: Vec2 = Vec2::new(1600.0, 960.0);

    #[test]
    fn test_follow_centers_the_target() {
        let mut camera = Camera::default();
        camera.follow(Vec2::new(800.0, 480.0), Vec2::new(16.0, 11.0), LIMIT);

        let screen = camera.screen_position(Vec2::new(800.0, 480.0));
        assert_eq!(screen + Vec2::new(16.0, 11.0) / 2.0, Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_follow_clamps_at_level_edges() {
        let mut camera = Camera::default();

        camera.follow(Vec2::new(4.0, 2.0), Vec2::new(16.0, 11.0), LIMIT);
        assert_eq!(camera.screen_position(Vec2::ZERO), Vec2::ZERO);

        camera.follow(Vec2::new(1590.0, 950.0), Vec2::new(16.0, 11.0), LIMIT);
        assert_eq!(camera.screen_position(LIMIT), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_small_level_pins_to_origin() {
        let mut camera = Camera::default();
        camera.follow(Vec2::new(50.0, 40.0), Vec2::new(16.0, 11.0), Vec2::new(96.0, 48.0));

        assert_eq!(camera.screen_position(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_visibility() {
        let mut camera = Camera::default();
        camera.follow(Vec2::new(800.0, 480.0), Vec2::new(16.0, 11.0), LIMIT);

        assert!(camera.is_in_frame(Vec2::new(800.0, 480.0), Vec2::splat(16.0)));
        assert!(!camera.is_in_frame(Vec2::new(0.0, 0.0), Vec2::splat(16.0)));
        // Partially on-screen counts as visible.
        let origin = camera.screen_position(Vec2::ZERO) * -1.0;
        assert!(camera.is_in_frame(origin - Vec2::new(8.0, 8.0), Vec2::splat(16.0)));
    }
}
