//! Velocity of Escape - an asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, wrap, collisions, splitting)
//! - `renderer`: Draw-call emission against a host surface
//! - `audio`: Sound effect requests against a host sink
//! - `platform`: Key mapping and fixed-step frame clock
//! - `game`: Host lifecycle hooks (start, draw, key down/up, update)
//! - `settings`: JSON-backed configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{Game, PlatformerGame};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub const SCREEN_TITLE: &str = "Velocity of Escape";
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// How far past the viewport asteroids travel before wrapping
    pub const OFFSCREEN_SPACE: f32 = 300.0;

    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_ASTEROID_COUNT: u32 = 5;

    /// Ship tuning (pixels and degrees per tick)
    pub const SHIP_MAX_SPEED: f32 = 4.0;
    pub const SHIP_DRAG: f32 = 0.05;
    pub const SHIP_FORWARD_THRUST: f32 = 0.15;
    pub const SHIP_REVERSE_THRUST: f32 = -0.2;
    pub const SHIP_TURN_RATE: f32 = 3.0;
    /// Invulnerability after (re)spawn, in ticks
    pub const SHIP_INVULNERABLE_TICKS: u32 = 250;

    pub const BULLET_SPEED: f32 = 13.0;

    /// Starting asteroid velocity/spin half-range
    pub const LARGE_ASTEROID_SPEED: f32 = 1.0;
    pub const ASTEROID_SPIN: f32 = 1.0;
    /// Number of children produced by a split
    pub const SPLIT_CHILDREN: usize = 3;

    /// Space Man platformer
    pub const PLATFORMER_TITLE: &str = "Space Man";
    pub const PLATFORMER_WIDTH: f32 = 1000.0;
    pub const PLATFORMER_HEIGHT: f32 = 650.0;
    pub const PLAYER_MOVEMENT_SPEED: f32 = 5.0;
    pub const PLAYER_TURN_SPEED: f32 = 2.0;
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Unit facing vector for an angle in degrees, 0° pointing up (+y)
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(-rad.sin(), rad.cos())
}

/// Inverse of [`heading`]: the angle (degrees) a vector points at
#[inline]
pub fn angle_of(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y).to_degrees()
}
