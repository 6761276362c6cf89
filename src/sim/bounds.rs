//! World boundary policies
//!
//! - The ship wraps by its bounding box across the visible viewport.
//! - Asteroids wrap by their center across the viewport grown by an
//!   off-screen margin, so they drift out of view before reappearing.
//! - Bullets never wrap; they despawn once their center leaves the
//!   viewport grown by the bullet margin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    /// Margin past the viewport that asteroids travel before wrapping
    pub offscreen_space: f32,
    /// Margin past the viewport after which bullets are removed
    pub bullet_margin: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            offscreen_space: OFFSCREEN_SPACE,
            bullet_margin: OFFSCREEN_SPACE,
        }
    }
}

impl WorldBounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Visible area, origin at bottom-left
    pub fn viewport(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Region asteroids live in
    pub fn wrap_limits(&self) -> Aabb {
        self.viewport().expand(self.offscreen_space)
    }

    /// Region outside of which bullets are removed
    pub fn despawn_limits(&self) -> Aabb {
        self.viewport().expand(self.bullet_margin)
    }

    /// Re-enter from the opposite edge once the box is fully off one edge
    pub fn wrap_ship(&self, pos: Vec2, half: Vec2) -> Vec2 {
        let mut pos = pos;
        let view = self.viewport();

        if pos.x + half.x < view.left() {
            // left edge flush with the right side
            pos.x = view.right() + half.x;
        } else if pos.x - half.x > view.right() {
            pos.x = view.left() - half.x;
        }

        if pos.y + half.y < view.bottom() {
            pos.y = view.top() + half.y;
        } else if pos.y - half.y > view.top() {
            pos.y = view.bottom() - half.y;
        }

        pos
    }

    /// Toroidal wrap of an asteroid center, each axis independently
    pub fn wrap_asteroid(&self, pos: Vec2) -> Vec2 {
        let mut pos = pos;
        let limits = self.wrap_limits();

        if pos.x < limits.left() {
            pos.x = limits.right();
        } else if pos.x > limits.right() {
            pos.x = limits.left();
        }

        if pos.y > limits.top() {
            pos.y = limits.bottom();
        } else if pos.y < limits.bottom() {
            pos.y = limits.top();
        }

        pos
    }

    /// True once a bullet center has left the despawn rectangle on any edge
    pub fn bullet_out_of_bounds(&self, pos: Vec2) -> bool {
        let limits = self.despawn_limits();
        pos.x < limits.left()
            || pos.x > limits.right()
            || pos.y > limits.top()
            || pos.y < limits.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let world = WorldBounds::default();
        let limits = world.wrap_limits();
        assert_eq!(limits.left(), -300.0);
        assert_eq!(limits.right(), 1100.0);
        assert_eq!(limits.bottom(), -300.0);
        assert_eq!(limits.top(), 900.0);
    }

    #[test]
    fn test_ship_wraps_only_when_fully_off() {
        let world = WorldBounds::default();
        let half = Vec2::new(20.0, 10.0);

        // Partly off the left edge: unchanged
        let partly = Vec2::new(-10.0, 300.0);
        assert_eq!(world.wrap_ship(partly, half), partly);

        // Fully off the left edge: left side now at the right edge
        let wrapped = world.wrap_ship(Vec2::new(-21.0, 300.0), half);
        assert_eq!(wrapped.x - half.x, 800.0);
        assert_eq!(wrapped.y, 300.0);

        // Fully off the top: bottom side now at y = 0
        let wrapped = world.wrap_ship(Vec2::new(400.0, 611.0), half);
        assert_eq!(wrapped.y + half.y, 0.0);
    }

    #[test]
    fn test_wrapped_ship_does_not_bounce_back() {
        let world = WorldBounds::default();
        let half = Vec2::new(20.0, 10.0);
        let once = world.wrap_ship(Vec2::new(-25.0, 300.0), half);
        assert_eq!(world.wrap_ship(once, half), once);
    }

    #[test]
    fn test_asteroid_wraps_each_axis() {
        let world = WorldBounds::default();
        let p = world.wrap_asteroid(Vec2::new(-301.0, 950.0));
        assert_eq!(p, Vec2::new(1100.0, -300.0));

        let p = world.wrap_asteroid(Vec2::new(1101.0, 10.0));
        assert_eq!(p, Vec2::new(-300.0, 10.0));
    }

    #[test]
    fn test_asteroid_wrap_idempotent_inside() {
        let world = WorldBounds::default();
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(-300.0, 900.0),
            Vec2::new(1050.0, -250.0),
        ] {
            assert_eq!(world.wrap_asteroid(p), p);
        }
    }

    #[test]
    fn test_bullet_despawn_edges() {
        let world = WorldBounds::default();
        assert!(!world.bullet_out_of_bounds(Vec2::new(400.0, 300.0)));
        assert!(!world.bullet_out_of_bounds(Vec2::new(1100.0, 900.0)));
        assert!(world.bullet_out_of_bounds(Vec2::new(1600.0, 300.0)));
        assert!(world.bullet_out_of_bounds(Vec2::new(400.0, -301.0)));
        assert!(world.bullet_out_of_bounds(Vec2::new(-301.0, 300.0)));
        assert!(world.bullet_out_of_bounds(Vec2::new(400.0, 901.0)));
    }
}
