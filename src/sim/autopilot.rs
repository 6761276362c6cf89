//! Demo mode driver
//!
//! Holds position, swings the nose toward the closest asteroid and fires
//! at a steady cadence once roughly lined up.

use super::state::GameState;
use super::tick::ShipCommand;
use crate::{angle_of, normalize_degrees};

/// Ticks between shots
pub const FIRE_INTERVAL_TICKS: u64 = 12;
/// Aim error (degrees) within which the autopilot shoots
pub const AIM_TOLERANCE_DEG: f32 = 10.0;

/// Commands the autopilot wants applied this tick
pub fn autopilot_commands(state: &GameState) -> Vec<ShipCommand> {
    let ship = &state.ship;
    let mut commands = vec![ShipCommand::ThrustRelease];

    let target = state.entities.asteroids().min_by(|a, b| {
        a.pos
            .distance_squared(ship.pos)
            .total_cmp(&b.pos.distance_squared(ship.pos))
    });
    let Some(target) = target else {
        commands.push(ShipCommand::TurnRelease);
        return commands;
    };

    let desired = angle_of(target.pos - ship.pos);
    let error = normalize_degrees(desired - ship.angle);
    let step = state.rules.ship.turn_rate;

    commands.push(if error > step {
        ShipCommand::TurnLeft
    } else if error < -step {
        ShipCommand::TurnRight
    } else {
        ShipCommand::TurnRelease
    });

    if error.abs() <= AIM_TOLERANCE_DEG && state.frame_count.is_multiple_of(FIRE_INTERVAL_TICKS) {
        commands.push(ShipCommand::Fire);
    }

    commands
}
