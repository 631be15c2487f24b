//! Entity model: types, capabilities, and resolved definitions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw type token that does not map to any known entity type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown entity type: {0}")]
pub struct UnknownEntityType(pub String);

/// The kind of an entity definition.
///
/// The set is fixed at compile time. Each type carries a static
/// capability flag saying whether it supports lifecycle operations
/// (schedule/suspend/resume) against the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Infrastructure definition. Referenced by feeds and processes,
    /// never placed under engine control itself.
    Cluster,
    /// A recurring data feed definition.
    Feed,
    /// A recurring computation definition.
    Process,
}

impl EntityType {
    /// All known entity types.
    pub const ALL: [EntityType; 3] = [EntityType::Cluster, EntityType::Feed, EntityType::Process];

    /// Whether this type supports schedule/suspend/resume lifecycle
    /// operations.
    pub fn schedulable(&self) -> bool {
        match self {
            EntityType::Cluster => false,
            EntityType::Feed | EntityType::Process => true,
        }
    }

    /// The canonical upper-case token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Cluster => "CLUSTER",
            EntityType::Feed => "FEED",
            EntityType::Process => "PROCESS",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    /// Case-insensitive resolution of a raw type token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLUSTER" => Ok(EntityType::Cluster),
            "FEED" => Ok(EntityType::Feed),
            "PROCESS" => Ok(EntityType::Process),
            _ => Err(UnknownEntityType(s.to_string())),
        }
    }
}

/// A resolved entity definition.
///
/// Identified by `(entity_type, name)`; names are unique within a
/// type. Owned by the registry; callers hold a transient copy for
/// the duration of one transition and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity_type: EntityType,
    pub name: String,
    /// The raw definition document as submitted.
    pub definition: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}

impl Entity {
    pub fn new(entity_type: EntityType, name: impl Into<String>, definition: serde_json::Value) -> Self {
        Self {
            entity_type,
            name: name.into(),
            definition,
            submitted_at: Utc::now(),
        }
    }
}
