//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bounds;
pub mod collision;
pub mod entity;
pub mod platformer;
pub mod rules;
pub mod state;
pub mod tick;
pub mod world;

pub use autopilot::autopilot_commands;
pub use bounds::WorldBounds;
pub use collision::{Aabb, first_overlap};
pub use entity::{AsteroidTier, Entity, EntityId, EntityKind, ShipState};
pub use platformer::{Platformer, PlatformerCommand};
pub use rules::{Rules, ShipTuning};
pub use state::{GameEvent, GameState};
pub use tick::{ShipCommand, TickInput, fire, split_asteroid, tick};
pub use world::Entities;
