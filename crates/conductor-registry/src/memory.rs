//! In-memory entity registry (for tests and embedded runs).

use std::collections::BTreeMap;

use async_trait::async_trait;
use conductor_types::{Entity, EntityType};
use parking_lot::RwLock;

use crate::gateway::{EntityRegistry, parse_payload};
use crate::{RegistryError, Result};

/// Registry backed by an in-process map. Same validation and
/// uniqueness semantics as the SQLite implementation.
#[derive(Default)]
pub struct MemoryRegistry {
    entities: RwLock<BTreeMap<(EntityType, String), Entity>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entity directly, bypassing payload validation.
    pub fn insert(&self, entity: Entity) {
        self.entities
            .write()
            .insert((entity.entity_type, entity.name.clone()), entity);
    }
}

#[async_trait]
impl EntityRegistry for MemoryRegistry {
    async fn resolve(&self, entity_type: EntityType, name: &str) -> Result<Entity> {
        self.entities
            .read()
            .get(&(entity_type, name.to_string()))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                entity_type,
                name: name.to_string(),
            })
    }

    async fn submit(&self, entity_type: EntityType, payload: &str) -> Result<Entity> {
        let (name, definition) = parse_payload(payload)?;
        let mut entities = self.entities.write();
        let key = (entity_type, name.clone());
        if entities.contains_key(&key) {
            return Err(RegistryError::AlreadyExists { entity_type, name });
        }
        let entity = Entity::new(entity_type, name, definition);
        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn exists(&self, entity_type: EntityType, name: &str) -> Result<bool> {
        Ok(self
            .entities
            .read()
            .contains_key(&(entity_type, name.to_string())))
    }

    async fn list(&self, entity_type: EntityType) -> Result<Vec<String>> {
        Ok(self
            .entities
            .read()
            .keys()
            .filter(|(t, _)| *t == entity_type)
            .map(|(_, name)| name.clone())
            .collect())
    }
}
