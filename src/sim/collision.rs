//! Bounding-box overlap tests
//!
//! Sprites collide by their axis-aligned bounding boxes. Rotated sprites
//! use the box enclosing the rotated rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};

/// Axis-aligned box, `min` is bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Box enclosing a `2*half` rectangle rotated by `angle_deg` about `center`
    pub fn rotated(center: Vec2, half: Vec2, angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let extent = Vec2::new(
            cos * half.x + sin * half.y,
            sin * half.x + cos * half.y,
        );
        Self::from_center(center, extent)
    }

    /// Grow the box by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Interiors intersect (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Point lies inside or on the boundary
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// First candidate whose bounds overlap `target`
pub fn first_overlap<'a>(
    target: &Aabb,
    candidates: impl IntoIterator<Item = &'a Entity>,
) -> Option<EntityId> {
    candidates
        .into_iter()
        .find(|e| target.overlaps(&e.bounds()))
        .map(|e| e.id)
}
