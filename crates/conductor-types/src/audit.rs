//! Audit trail records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::request::{ActorContext, LifecycleAction};

/// Sentinel recorded in the entity-name slot when the definition
/// arrived as a streamed payload and no name is known yet.
pub const STREAMED_PAYLOAD: &str = "STREAMED_DATA";

/// One immutable line in the audit trail.
///
/// Records intent: the append happens before the side-effecting call
/// is attempted, so a trail exists even when the call fails
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub entity_name: String,
    pub entity_type: EntityType,
    pub action: LifecycleAction,
    pub actor: ActorContext,
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        entity_name: impl Into<String>,
        entity_type: EntityType,
        action: LifecycleAction,
        actor: ActorContext,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            entity_type,
            action,
            actor,
            timestamp: Utc::now(),
        }
    }
}
