//! The execution engine adapter trait.

use std::fmt;

use async_trait::async_trait;
use conductor_types::Entity;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Lifecycle state of an entity as the engine sees it.
///
/// Held by the engine only; coordination layers query it fresh on
/// every call instead of caching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Unscheduled,
    Active,
    Suspended,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Unscheduled => "UNSCHEDULED",
            LifecycleState::Active => "ACTIVE",
            LifecycleState::Suspended => "SUSPENDED",
        };
        f.write_str(s)
    }
}

/// Adapter over the system that actually runs scheduled work.
///
/// Every call may be slow and may fail for reasons opaque to the
/// caller. No call here is retried by this layer.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Whether the engine currently has this entity in the active
    /// state.
    async fn is_active(&self, entity: &Entity) -> Result<bool>;

    /// Place the entity under engine control.
    async fn schedule(&self, entity: &Entity) -> Result<()>;

    /// Pause a running entity. The engine enforces its own transition
    /// rules; no pre-check happens on the calling side.
    async fn suspend(&self, entity: &Entity) -> Result<()>;

    /// Resume a suspended entity.
    async fn resume(&self, entity: &Entity) -> Result<()>;
}
