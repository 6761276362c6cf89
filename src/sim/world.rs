//! Entity registry
//!
//! Bullets and asteroids live in one map keyed by [`EntityId`]. Views such
//! as "all asteroids" are filters over the map, so removing an entity is a
//! single operation. Iteration is in id order, which keeps the simulation
//! deterministic.

use std::collections::BTreeMap;

use super::entity::{Entity, EntityId};

#[derive(Debug, Clone)]
pub struct Entities {
    map: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl Default for Entities {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
            // 0 is the ship
            next_id: 1,
        }
    }
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity under a fresh id and return that id
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.id = id;
        self.map.insert(id, entity);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.map.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.map.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.map.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.map.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.map.values_mut()
    }

    pub fn asteroids(&self) -> impl Iterator<Item = &Entity> {
        self.iter().filter(|e| e.is_asteroid())
    }

    pub fn bullets(&self) -> impl Iterator<Item = &Entity> {
        self.iter().filter(|e| e.is_bullet())
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroids().count()
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets().count()
    }

    /// Snapshot of bullet ids, safe to hold while mutating the registry
    pub fn bullet_ids(&self) -> Vec<EntityId> {
        self.bullets().map(|e| e.id).collect()
    }
}
