//! Entity record shared by the ship, bullets and asteroids
//!
//! One record type with a kind tag; per-kind behavior is a `match` on
//! [`EntityKind`] in the tick, not a type hierarchy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::assets::{self, SpriteAsset};

/// Stable entity identifier, never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved for the player ship
    pub const SHIP: EntityId = EntityId(0);
}

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Tiny = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
}

impl AsteroidTier {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Tier of the pieces this asteroid breaks into (None = terminal)
    ///
    /// Small asteroids break into tiny ones, so every tier above tiny
    /// produces children.
    pub fn child(self) -> Option<Self> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => Some(AsteroidTier::Tiny),
            AsteroidTier::Tiny => None,
        }
    }

    /// Half-range of each velocity component for an asteroid spawned at
    /// this tier. Smaller pieces fly faster.
    pub fn spawn_speed(self) -> f32 {
        match self {
            AsteroidTier::Large => crate::consts::LARGE_ASTEROID_SPEED,
            AsteroidTier::Medium => 1.25,
            AsteroidTier::Small => 1.5,
            AsteroidTier::Tiny => 1.75,
        }
    }
}

/// Ship-only control state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipState {
    /// Speed added per tick while a thrust key is held
    pub thrust: f32,
    /// Signed scalar speed along the facing direction
    pub speed: f32,
    /// Degrees per tick while a turn key is held
    pub turn_rate: f32,
    /// Ticks of respawn protection remaining
    pub invulnerable_ticks: u32,
}

impl ShipState {
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship(ShipState),
    Bullet,
    Asteroid { tier: AsteroidTier },
}

/// A simulated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Center position (pixels, y up)
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Sprite rotation in degrees, counter-clockwise
    pub angle: f32,
    /// Degrees added to `angle` per tick
    pub spin: f32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn ship(pos: Vec2, invulnerable_ticks: u32) -> Self {
        Self {
            id: EntityId::SHIP,
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            spin: 0.0,
            kind: EntityKind::Ship(ShipState {
                invulnerable_ticks,
                ..Default::default()
            }),
        }
    }

    /// Bullet travelling along `vel`; the id is assigned on spawn
    pub fn bullet(pos: Vec2, vel: Vec2) -> Self {
        let mut bullet = Self {
            id: EntityId::SHIP,
            pos,
            vel,
            angle: 0.0,
            spin: 0.0,
            kind: EntityKind::Bullet,
        };
        bullet.face_velocity();
        bullet
    }

    /// Asteroid; the id is assigned on spawn
    pub fn asteroid(tier: AsteroidTier, pos: Vec2, vel: Vec2, spin: f32) -> Self {
        Self {
            id: EntityId::SHIP,
            pos,
            vel,
            angle: 0.0,
            spin,
            kind: EntityKind::Asteroid { tier },
        }
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self.kind, EntityKind::Asteroid { .. })
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, EntityKind::Bullet)
    }

    pub fn tier(&self) -> Option<AsteroidTier> {
        match self.kind {
            EntityKind::Asteroid { tier } => Some(tier),
            _ => None,
        }
    }

    pub fn ship_state(&self) -> Option<&ShipState> {
        match &self.kind {
            EntityKind::Ship(ship) => Some(ship),
            _ => None,
        }
    }

    /// Point the sprite along the direction of travel (bullet textures face +x)
    pub fn face_velocity(&mut self) {
        if self.vel != Vec2::ZERO {
            self.angle = self.vel.y.atan2(self.vel.x).to_degrees();
        }
    }

    /// Image drawn for this entity
    pub fn sprite(&self) -> SpriteAsset {
        match self.kind {
            EntityKind::Ship(_) => assets::SHIP,
            EntityKind::Bullet => assets::BULLET,
            EntityKind::Asteroid { tier } => assets::asteroid(tier),
        }
    }

    /// Bounding box of the rotated sprite
    pub fn bounds(&self) -> Aabb {
        Aabb::rotated(self.pos, self.sprite().half_extents(), self.angle)
    }
}
