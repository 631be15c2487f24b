//! In-process execution engine.
//!
//! Keeps lifecycle state in a map for the lifetime of the process.
//! Useful for local runs and as the reference for transition rules:
//! schedule requires `Unscheduled`, suspend requires `Active`, resume
//! requires `Suspended`.

use std::collections::HashMap;

use async_trait::async_trait;
use conductor_types::{Entity, EntityType};
use parking_lot::RwLock;
use tracing::info;

use crate::adapter::{ExecutionEngine, LifecycleState};
use crate::{EngineError, Result};

type EntityKey = (EntityType, String);

#[derive(Default)]
pub struct EmbeddedEngine {
    states: RwLock<HashMap<EntityKey, LifecycleState>>,
}

impl EmbeddedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of an entity, `Unscheduled` when never seen.
    pub fn state(&self, entity: &Entity) -> LifecycleState {
        self.states
            .read()
            .get(&Self::key(entity))
            .copied()
            .unwrap_or(LifecycleState::Unscheduled)
    }

    fn key(entity: &Entity) -> EntityKey {
        (entity.entity_type, entity.name.clone())
    }
}

#[async_trait]
impl ExecutionEngine for EmbeddedEngine {
    async fn is_active(&self, entity: &Entity) -> Result<bool> {
        Ok(self.state(entity) == LifecycleState::Active)
    }

    async fn schedule(&self, entity: &Entity) -> Result<()> {
        let mut states = self.states.write();
        let key = Self::key(entity);
        match states.get(&key).copied().unwrap_or(LifecycleState::Unscheduled) {
            LifecycleState::Unscheduled => {
                states.insert(key, LifecycleState::Active);
                info!(entity = %entity.name, entity_type = %entity.entity_type, "scheduled");
                Ok(())
            }
            LifecycleState::Active => Err(EngineError::Rejected(format!(
                "{}({}) is already running",
                entity.name, entity.entity_type
            ))),
            LifecycleState::Suspended => Err(EngineError::Rejected(format!(
                "{}({}) is suspended; resume it instead of scheduling",
                entity.name, entity.entity_type
            ))),
        }
    }

    async fn suspend(&self, entity: &Entity) -> Result<()> {
        let mut states = self.states.write();
        let key = Self::key(entity);
        match states.get(&key).copied().unwrap_or(LifecycleState::Unscheduled) {
            LifecycleState::Active => {
                states.insert(key, LifecycleState::Suspended);
                info!(entity = %entity.name, entity_type = %entity.entity_type, "suspended");
                Ok(())
            }
            state => Err(EngineError::Rejected(format!(
                "cannot suspend {}({}) from state {state}",
                entity.name, entity.entity_type
            ))),
        }
    }

    async fn resume(&self, entity: &Entity) -> Result<()> {
        let mut states = self.states.write();
        let key = Self::key(entity);
        match states.get(&key).copied().unwrap_or(LifecycleState::Unscheduled) {
            LifecycleState::Suspended => {
                states.insert(key, LifecycleState::Active);
                info!(entity = %entity.name, entity_type = %entity.entity_type, "resumed");
                Ok(())
            }
            state => Err(EngineError::Rejected(format!(
                "cannot resume {}({}) from state {state}",
                entity.name, entity.entity_type
            ))),
        }
    }
}
