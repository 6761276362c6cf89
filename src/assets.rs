//! Asset resource paths and sprite metrics
//!
//! Paths are opaque to this crate and resolved by the host framework.
//! Pixel sizes are the unscaled texture dimensions; hit boxes are derived
//! from them so collision matches what is drawn.

use glam::Vec2;

use crate::sim::AsteroidTier;

/// Base sprite scale
pub const SCALE: f32 = 0.5;

/// An image resource with its texture size and draw scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAsset {
    pub path: &'static str,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl SpriteAsset {
    /// Half extents of the scaled sprite, unrotated
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * self.scale * 0.5
    }
}

pub const SHIP: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/playerShip1_orange.png",
    width: 99.0,
    height: 75.0,
    scale: SCALE,
};

/// HUD life indicator
pub const LIFE_ICON: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/playerLife1_orange.png",
    width: 33.0,
    height: 26.0,
    scale: SCALE,
};

pub const BULLET: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/laserBlue01.png",
    width: 54.0,
    height: 9.0,
    scale: SCALE,
};

pub const ASTEROID_LARGE: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/meteorGrey_big1.png",
    width: 101.0,
    height: 84.0,
    scale: SCALE,
};

pub const ASTEROID_MEDIUM: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/meteorGrey_med1.png",
    width: 43.0,
    height: 43.0,
    scale: SCALE * 1.5,
};

pub const ASTEROID_SMALL: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/meteorGrey_small1.png",
    width: 28.0,
    height: 28.0,
    scale: SCALE * 1.5,
};

pub const ASTEROID_TINY: SpriteAsset = SpriteAsset {
    path: ":resources:images/space_shooter/meteorGrey_tiny1.png",
    width: 18.0,
    height: 18.0,
    scale: SCALE * 1.5,
};

/// Sprite for an asteroid of the given tier
pub fn asteroid(tier: AsteroidTier) -> SpriteAsset {
    match tier {
        AsteroidTier::Large => ASTEROID_LARGE,
        AsteroidTier::Medium => ASTEROID_MEDIUM,
        AsteroidTier::Small => ASTEROID_SMALL,
        AsteroidTier::Tiny => ASTEROID_TINY,
    }
}

/// Space Man sprites
pub mod platformer {
    use super::SpriteAsset;

    pub const PLAYER: SpriteAsset = SpriteAsset {
        path: "images/SpaceShipSprites/spaceshooter/PNG/playerShip1_blue.png",
        width: 99.0,
        height: 75.0,
        scale: 0.5,
    };

    pub const WALL: SpriteAsset = SpriteAsset {
        path: "images/SpaceShipSprites/spaceshooter/PNG/Meteors/meteorBrown_med1.png",
        width: 43.0,
        height: 43.0,
        scale: 0.5,
    };
}

/// Sound resources
pub mod sounds {
    pub const LASER: &str = ":resources:sounds/hurt5.wav";
    pub const EXPLOSION_LARGE: &str = ":resources:sounds/explosion1.wav";
    pub const EXPLOSION_MEDIUM: &str = ":resources:sounds/explosion2.wav";
    pub const HIT_SMALL: &str = ":resources:sounds/hit1.wav";
    pub const HIT_TINY: &str = ":resources:sounds/hit2.wav";
}
