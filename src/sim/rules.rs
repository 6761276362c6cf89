//! Gameplay tuning
//!
//! Every value defaults to the constants in [`crate::consts`]; a settings
//! file may override any subset.

use serde::{Deserialize, Serialize};

use super::bounds::WorldBounds;
use crate::consts::*;
use crate::{Error, Result};

/// Ship handling (pixels and degrees per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub max_speed: f32,
    pub drag: f32,
    pub forward_thrust: f32,
    pub reverse_thrust: f32,
    pub turn_rate: f32,
    pub invulnerable_ticks: u32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_speed: SHIP_MAX_SPEED,
            drag: SHIP_DRAG,
            forward_thrust: SHIP_FORWARD_THRUST,
            reverse_thrust: SHIP_REVERSE_THRUST,
            turn_rate: SHIP_TURN_RATE,
            invulnerable_ticks: SHIP_INVULNERABLE_TICKS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub world: WorldBounds,
    pub starting_lives: u32,
    pub starting_asteroids: u32,
    pub ship: ShipTuning,
    pub bullet_speed: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            starting_lives: STARTING_LIVES,
            starting_asteroids: STARTING_ASTEROID_COUNT,
            ship: ShipTuning::default(),
            bullet_speed: BULLET_SPEED,
        }
    }
}

impl Rules {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let world = &self.world;
        let ship = &self.ship;
        for (name, value) in [
            ("world.width", world.width),
            ("world.height", world.height),
            ("world.offscreen_space", world.offscreen_space),
            ("world.bullet_margin", world.bullet_margin),
            ("ship.max_speed", ship.max_speed),
            ("ship.drag", ship.drag),
            ("ship.forward_thrust", ship.forward_thrust),
            ("ship.reverse_thrust", ship.reverse_thrust),
            ("ship.turn_rate", ship.turn_rate),
            ("bullet_speed", self.bullet_speed),
        ] {
            if !value.is_finite() {
                return Err(Error::Invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if !(world.width > 0.0 && world.height > 0.0) {
            return Err(Error::Invalid(format!(
                "world size must be positive, got {}x{}",
                world.width, world.height
            )));
        }
        if world.offscreen_space < 0.0 || world.bullet_margin < 0.0 {
            return Err(Error::Invalid("world margins must not be negative".into()));
        }
        // Asteroids spawn uniformly over this region
        let limits = world.wrap_limits();
        if !(limits.width().is_finite() && limits.height().is_finite()) {
            return Err(Error::Invalid(format!(
                "world plus offscreen_space is too large: {}x{}",
                limits.width(),
                limits.height()
            )));
        }
        if !(self.ship.max_speed > 0.0) {
            return Err(Error::Invalid(format!(
                "ship max_speed must be positive, got {}",
                self.ship.max_speed
            )));
        }
        if self.ship.drag < 0.0 {
            return Err(Error::Invalid(format!(
                "ship drag must not be negative, got {}",
                self.ship.drag
            )));
        }
        if !(self.bullet_speed > 0.0) {
            return Err(Error::Invalid(format!(
                "bullet_speed must be positive, got {}",
                self.bullet_speed
            )));
        }
        Ok(())
    }
}
