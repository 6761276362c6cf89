//! Fixed timestep simulation tick
//!
//! Core update loop: integrate motion, apply boundary policies, resolve
//! collisions, and split destroyed asteroids.

use glam::Vec2;
use rand::Rng;

use super::autopilot::autopilot_commands;
use super::collision::first_overlap;
use super::entity::{AsteroidTier, Entity, EntityId, EntityKind};
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::{heading, normalize_degrees};

/// Ship control commands, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipCommand {
    ThrustForward,
    ThrustReverse,
    ThrustRelease,
    TurnLeft,
    TurnRight,
    TurnRelease,
    Fire,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Commands applied before the tick runs
    pub commands: Vec<ShipCommand>,
    /// Demo mode - the autopilot flies the ship
    pub autopilot: bool,
}

impl GameState {
    /// Apply a control command immediately. Ignored after game over.
    pub fn apply(&mut self, command: ShipCommand) {
        if self.game_over {
            return;
        }
        if command == ShipCommand::Fire {
            fire(self);
            return;
        }

        let tuning = self.rules.ship;
        let EntityKind::Ship(ship) = &mut self.ship.kind else {
            return;
        };
        match command {
            ShipCommand::ThrustForward => ship.thrust = tuning.forward_thrust,
            ShipCommand::ThrustReverse => ship.thrust = tuning.reverse_thrust,
            ShipCommand::ThrustRelease => ship.thrust = 0.0,
            ShipCommand::TurnLeft => ship.turn_rate = tuning.turn_rate,
            ShipCommand::TurnRight => ship.turn_rate = -tuning.turn_rate,
            ShipCommand::TurnRelease => ship.turn_rate = 0.0,
            ShipCommand::Fire => {}
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.frame_count += 1;

    // Final frame stays frozen
    if state.game_over {
        return;
    }

    for &command in &input.commands {
        state.apply(command);
    }
    if input.autopilot {
        for command in autopilot_commands(state) {
            state.apply(command);
        }
    }

    update_ship(state);
    update_entities(state);
    resolve_bullet_hits(state);
    resolve_ship_hits(state);
}

/// Drag, thrust, speed clamp, then move along the facing direction
fn update_ship(state: &mut GameState) {
    let tuning = state.rules.ship;
    let world = state.rules.world;
    let ship = &mut state.ship;
    let EntityKind::Ship(control) = &mut ship.kind else {
        return;
    };

    control.invulnerable_ticks = control.invulnerable_ticks.saturating_sub(1);

    // Drag pulls speed toward zero without crossing it
    if control.speed > 0.0 {
        control.speed = (control.speed - tuning.drag).max(0.0);
    } else if control.speed < 0.0 {
        control.speed = (control.speed + tuning.drag).min(0.0);
    }

    control.speed = (control.speed + control.thrust).clamp(-tuning.max_speed, tuning.max_speed);

    let speed = control.speed;
    let turn_rate = control.turn_rate;
    ship.vel = heading(ship.angle) * speed;
    ship.pos += ship.vel;
    ship.angle = normalize_degrees(ship.angle + turn_rate);

    let half = ship.bounds().half_extents();
    ship.pos = world.wrap_ship(ship.pos, half);
}

/// Move bullets and asteroids; wrap asteroids, expire stray bullets
fn update_entities(state: &mut GameState) {
    let world = state.rules.world;
    let mut expired = Vec::new();

    for entity in state.entities.iter_mut() {
        entity.pos += entity.vel;
        match entity.kind {
            EntityKind::Asteroid { .. } => {
                entity.angle = normalize_degrees(entity.angle + entity.spin);
                entity.pos = world.wrap_asteroid(entity.pos);
            }
            EntityKind::Bullet => {
                entity.face_velocity();
                if world.bullet_out_of_bounds(entity.pos) {
                    expired.push(entity.id);
                }
            }
            EntityKind::Ship(_) => {}
        }
    }

    for id in expired {
        log::trace!("Bullet {:?} left the field", id);
        state.entities.remove(id);
    }
}

/// Each bullet destroys at most one asteroid per tick
fn resolve_bullet_hits(state: &mut GameState) {
    for bullet_id in state.entities.bullet_ids() {
        let Some(bullet) = state.entities.get(bullet_id) else {
            continue;
        };
        let bounds = bullet.bounds();
        let Some(asteroid_id) = first_overlap(&bounds, state.entities.asteroids()) else {
            continue;
        };

        state.entities.remove(bullet_id);
        destroy_asteroid(state, asteroid_id);
    }
}

fn resolve_ship_hits(state: &mut GameState) {
    if state.is_ship_invulnerable() {
        return;
    }

    let bounds = state.ship.bounds();
    let Some(asteroid_id) = first_overlap(&bounds, state.entities.asteroids()) else {
        return;
    };

    if state.lives == 0 {
        state.game_over = true;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score={} frame={}",
            state.score,
            state.frame_count
        );
        return;
    }

    state.lives -= 1;
    state.respawn_ship();
    state.events.push(GameEvent::ShipHit {
        lives_left: state.lives,
    });
    log::info!("Ship hit, {} lives left", state.lives);

    destroy_asteroid(state, asteroid_id);
}

fn destroy_asteroid(state: &mut GameState, id: EntityId) {
    if let Some(asteroid) = state.entities.remove(id)
        && let Some(tier) = asteroid.tier()
    {
        split_asteroid(state, tier, asteroid.pos);
    }
}

/// Score a destroyed asteroid and spawn its pieces at `pos`
///
/// Returns the ids of the spawned children (empty for tiny asteroids).
pub fn split_asteroid(state: &mut GameState, tier: AsteroidTier, pos: Vec2) -> Vec<EntityId> {
    state.score += 1;
    state.events.push(GameEvent::AsteroidDestroyed { tier, pos });

    let Some(child_tier) = tier.child() else {
        log::debug!("Tiny asteroid destroyed at {:?}", pos);
        return Vec::new();
    };

    let range = child_tier.spawn_speed();
    let children: Vec<EntityId> = (0..SPLIT_CHILDREN)
        .map(|_| {
            let vel = Vec2::new(
                state.rng.random_range(-range..range),
                state.rng.random_range(-range..range),
            );
            let spin = state.rng.random_range(-ASTEROID_SPIN..ASTEROID_SPIN);
            state.spawn_asteroid_with(child_tier, pos, vel, spin)
        })
        .collect();

    log::debug!(
        "Asteroid tier {} split into {} x tier {}",
        tier.level(),
        children.len(),
        child_tier.level()
    );
    children
}

/// Launch a bullet from the ship's nose direction; no-op while respawning
pub fn fire(state: &mut GameState) -> Option<EntityId> {
    if state.game_over || state.is_ship_invulnerable() {
        return None;
    }

    let vel = heading(state.ship.angle) * state.rules.bullet_speed;
    let mut bullet = Entity::bullet(state.ship.pos, vel);
    // First step happens at launch
    bullet.pos += bullet.vel;

    let pos = bullet.pos;
    let id = state.entities.spawn(bullet);
    state.events.push(GameEvent::Fired { pos });
    log::debug!("Fired bullet {:?} at angle {:.1}", id, state.ship.angle);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rules::Rules;

    fn vulnerable_state() -> GameState {
        let mut state = GameState::empty(Rules::default(), 12345);
        if let EntityKind::Ship(ship) = &mut state.ship.kind {
            ship.invulnerable_ticks = 0;
        }
        state
    }

    #[test]
    fn test_thrust_moves_ship_up() {
        let mut state = vulnerable_state();
        let start = state.ship.pos;
        state.apply(ShipCommand::ThrustForward);
        tick(&mut state, &TickInput::default());

        assert!(state.ship.pos.y > start.y);
        assert!((state.ship.pos.x - start.x).abs() < 1e-4);
        assert!((state.ship_state().unwrap().speed - SHIP_FORWARD_THRUST).abs() < 1e-6);
    }

    #[test]
    fn test_drag_stops_at_zero() {
        let mut state = vulnerable_state();
        if let EntityKind::Ship(ship) = &mut state.ship.kind {
            ship.speed = 0.12;
        }
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ship_state().unwrap().speed, 0.0);

        if let EntityKind::Ship(ship) = &mut state.ship.kind {
            ship.speed = -0.12;
        }
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ship_state().unwrap().speed, 0.0);
    }

    #[test]
    fn test_speed_clamped() {
        let mut state = vulnerable_state();
        state.apply(ShipCommand::ThrustForward);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ship_state().unwrap().speed, SHIP_MAX_SPEED);

        state.apply(ShipCommand::ThrustReverse);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ship_state().unwrap().speed, -SHIP_MAX_SPEED);
    }

    #[test]
    fn test_turning() {
        let mut state = vulnerable_state();
        state.apply(ShipCommand::TurnLeft);
        tick(&mut state, &TickInput::default());
        assert!((state.ship.angle - SHIP_TURN_RATE).abs() < 1e-6);

        state.apply(ShipCommand::TurnRight);
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert!((state.ship.angle + SHIP_TURN_RATE).abs() < 1e-5);

        state.apply(ShipCommand::TurnRelease);
        tick(&mut state, &TickInput::default());
        assert!((state.ship.angle + SHIP_TURN_RATE).abs() < 1e-5);
    }

    #[test]
    fn test_fire_blocked_while_invulnerable() {
        let mut state = GameState::empty(Rules::default(), 1);
        assert!(state.is_ship_invulnerable());
        assert_eq!(fire(&mut state), None);
        assert_eq!(state.entities.bullet_count(), 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_fire_spawns_bullet_along_heading() {
        let mut state = vulnerable_state();
        state.ship.angle = 90.0;
        let id = fire(&mut state).unwrap();
        let bullet = state.entities.get(id).unwrap();

        assert!((bullet.vel.x + BULLET_SPEED).abs() < 1e-4);
        assert!(bullet.vel.y.abs() < 1e-4);
        assert!((bullet.pos.x - (400.0 - BULLET_SPEED)).abs() < 1e-4);
        assert!(matches!(state.events[0], GameEvent::Fired { .. }));
    }

    #[test]
    fn test_bullet_destroys_one_asteroid() {
        let mut state = vulnerable_state();
        // Two asteroids stacked far from the ship, bullet parked on them
        let pos = Vec2::new(100.0, 100.0);
        let first = state.spawn_asteroid_with(AsteroidTier::Tiny, pos, Vec2::ZERO, 0.0);
        let second = state.spawn_asteroid_with(AsteroidTier::Tiny, pos, Vec2::ZERO, 0.0);
        state.entities.spawn(Entity::bullet(pos, Vec2::new(0.001, 0.0)));

        tick(&mut state, &TickInput::default());

        assert!(!state.entities.contains(first));
        assert!(state.entities.contains(second));
        assert_eq!(state.entities.bullet_count(), 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_split_large_into_three_medium() {
        let mut state = vulnerable_state();
        let pos = Vec2::new(123.0, 456.0);
        let children = split_asteroid(&mut state, AsteroidTier::Large, pos);

        assert_eq!(children.len(), 3);
        for id in children {
            let child = state.entities.get(id).unwrap();
            assert_eq!(child.tier(), Some(AsteroidTier::Medium));
            assert_eq!(child.pos, pos);
            assert!(child.vel.x.abs() <= 1.25 && child.vel.y.abs() <= 1.25);
            assert!(child.spin.abs() <= ASTEROID_SPIN);
        }
    }

    #[test]
    fn test_split_tiny_is_terminal() {
        let mut state = vulnerable_state();
        let children = split_asteroid(&mut state, AsteroidTier::Tiny, Vec2::ZERO);
        assert!(children.is_empty());
        assert_eq!(state.asteroid_count(), 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = vulnerable_state();
        state.game_over = true;
        let asteroid =
            state.spawn_asteroid_with(AsteroidTier::Large, Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.frame_count, 1);
        assert_eq!(state.entities.get(asteroid).unwrap().pos, Vec2::ZERO);
        state.apply(ShipCommand::ThrustForward);
        assert_eq!(state.ship_state().unwrap().thrust, 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                commands: vec![ShipCommand::ThrustForward, ShipCommand::TurnLeft],
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                autopilot: true,
                ..Default::default()
            },
        ];

        for _ in 0..300 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.frame_count, state2.frame_count);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.ship, state2.ship);
        let a: Vec<_> = state1.entities.iter().collect();
        let b: Vec<_> = state2.entities.iter().collect();
        assert_eq!(a, b);
    }
}
