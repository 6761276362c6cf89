//! Session state
//!
//! Everything the update loop reads or writes lives in [`GameState`]; the
//! frame loop owns it and passes it explicitly into [`super::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{AsteroidTier, Entity, EntityId, ShipState};
use super::rules::Rules;
use super::world::Entities;
use crate::consts::*;

/// Things that happened during a tick, for sound and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the ship
    Fired { pos: Vec2 },
    /// An asteroid was consumed by a bullet or the ship
    AsteroidDestroyed { tier: AsteroidTier, pos: Vec2 },
    /// The ship collided and respawned
    ShipHit { lives_left: u32 },
    /// The ship collided with no lives left
    GameOver { score: u64 },
}

/// Complete game session (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rules: Rules,
    pub rng: Pcg32,
    /// The player ship, always present
    pub ship: Entity,
    /// Bullets and asteroids
    pub entities: Entities,
    pub score: u64,
    pub lives: u32,
    pub game_over: bool,
    /// Ticks since the session started
    pub frame_count: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session with default rules
    pub fn new(seed: u64) -> Self {
        Self::with_rules(Rules::default(), seed)
    }

    /// New session: ship at the center, starting asteroids scattered over
    /// the wrap region
    pub fn with_rules(rules: Rules, seed: u64) -> Self {
        let mut state = Self::empty(rules, seed);

        let limits = rules.world.wrap_limits();
        for _ in 0..rules.starting_asteroids {
            let pos = Vec2::new(
                state.rng.random_range(limits.left()..limits.right()),
                state.rng.random_range(limits.bottom()..limits.top()),
            );
            state.spawn_asteroid(AsteroidTier::Large, pos);
        }

        log::info!(
            "New session: seed={} asteroids={} lives={}",
            seed,
            state.entities.asteroid_count(),
            state.lives
        );
        state
    }

    /// Session with only the ship; used to build scenarios
    pub fn empty(rules: Rules, seed: u64) -> Self {
        Self {
            seed,
            rules,
            rng: Pcg32::seed_from_u64(seed),
            ship: Entity::ship(rules.world.center(), rules.ship.invulnerable_ticks),
            entities: Entities::new(),
            score: 0,
            lives: rules.starting_lives,
            game_over: false,
            frame_count: 0,
            events: Vec::new(),
        }
    }

    /// Put the ship back at the center, at rest, with fresh protection
    pub fn respawn_ship(&mut self) {
        self.ship = Entity::ship(
            self.rules.world.center(),
            self.rules.ship.invulnerable_ticks,
        );
    }

    pub fn ship_state(&self) -> Option<&ShipState> {
        self.ship.ship_state()
    }

    pub fn is_ship_invulnerable(&self) -> bool {
        self.ship_state().is_some_and(|s| s.is_invulnerable())
    }

    /// Spawn an asteroid with a random drift and spin for its tier
    pub fn spawn_asteroid(&mut self, tier: AsteroidTier, pos: Vec2) -> EntityId {
        let range = tier.spawn_speed();
        let vel = Vec2::new(
            self.rng.random_range(-range..range),
            self.rng.random_range(-range..range),
        );
        let spin = self.rng.random_range(-ASTEROID_SPIN..ASTEROID_SPIN);
        self.spawn_asteroid_with(tier, pos, vel, spin)
    }

    pub fn spawn_asteroid_with(
        &mut self,
        tier: AsteroidTier,
        pos: Vec2,
        vel: Vec2,
        spin: f32,
    ) -> EntityId {
        self.entities.spawn(Entity::asteroid(tier, pos, vel, spin))
    }

    /// The ship followed by every bullet and asteroid
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.ship).chain(self.entities.iter())
    }

    pub fn asteroid_count(&self) -> usize {
        self.entities.asteroid_count()
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
