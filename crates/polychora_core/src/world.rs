//! World container for entities
//!
//! The World owns all entities in the simulation and advances them one fixed
//! tick at a time.

use polychora_physics::StepOutcome;
use rand::Rng;
use slotmap::{new_key_type, SlotMap};

use crate::Entity;

new_key_type! {
    /// Key to an entity in the world
    ///
    /// Uses generational indexing, so keys of removed entities return None
    /// instead of pointing at whatever reuses their slot.
    pub struct EntityKey;
}

/// Counts gathered during one world tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Entities whose body was stepped
    pub stepped: usize,
    /// Entities that bounced off the floor
    pub bounced: usize,
    /// Entities that are resting on the floor
    pub resting: usize,
    /// Entities whose world vertices were recomputed
    pub refreshed: usize,
}

/// The 4D world containing all entities
#[derive(Default)]
pub struct World {
    entities: SlotMap<EntityKey, Entity>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity from the world and return it
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        self.entities.remove(key)
    }

    /// Get a reference to an entity by key
    pub fn get_entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Get a mutable reference to an entity by key
    pub fn get_entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Find the first entity with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityKey, &Entity)> {
        self.entities
            .iter()
            .find(|(_, e)| e.name.as_deref() == Some(name))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities from the world
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Iterate over keys and entities
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    /// Iterate over keys and entities mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityKey, &mut Entity)> {
        self.entities.iter_mut()
    }

    /// Advance the world by one tick
    ///
    /// This method:
    /// 1. Steps every rigid body, writing into its entity's transform
    /// 2. Recomputes world vertices for every entity whose transform changed
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> TickStats {
        let mut stats = TickStats::default();

        for (_, entity) in self.entities.iter_mut() {
            if let Some(outcome) = entity.step_physics(dt, rng) {
                stats.stepped += 1;
                match outcome {
                    StepOutcome::Bounced => stats.bounced += 1,
                    StepOutcome::Resting => stats.resting += 1,
                    StepOutcome::Moving => {}
                }
            }

            if entity.refresh_world_vertices() {
                stats.refreshed += 1;
            }
        }

        stats
    }
}
