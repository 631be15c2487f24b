//! The lifecycle error taxonomy.
//!
//! Every kind below is caught at the outer boundary of each public
//! coordinator operation, rolls the transaction envelope back, and is
//! translated to the uniform caller-facing failure shape (all of them
//! classify as caller errors, the HTTP-equivalent "bad request").
//! The kind itself is distinguished only in logs.

use conductor_engine::EngineError;
use conductor_registry::RegistryError;
use conductor_types::EntityType;
use thiserror::Error;

use crate::transaction::TransactionError;

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Raw type token does not map to any known entity type.
    #[error("unknown entity type: {0}")]
    UnknownType(String),

    /// Known type, but not capability-flagged for lifecycle
    /// operations.
    #[error("entity type {0} cannot be scheduled, suspended, or resumed")]
    Unschedulable(EntityType),

    /// The registry has no entity with this type and name.
    #[error("{name}({entity_type}) is not found in the registry")]
    NotFound { entity_type: EntityType, name: String },

    /// Schedule requested while the engine reports the entity active.
    #[error("{name}({entity_type}) is already scheduled with the execution engine")]
    AlreadyScheduled { entity_type: EntityType, name: String },

    /// Opaque failure from the execution engine.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Malformed or duplicate submission payload.
    #[error("{0}")]
    Validation(String),

    /// Audit append failure. Audit is part of the transition's
    /// contract, so this aborts like any other kind.
    #[error("audit error: {0}")]
    Audit(#[from] conductor_audit::AuditError),

    /// Storage or other unanticipated failure; follows the identical
    /// rollback-and-wrap path.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LifecycleError {
    /// Short stable token for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleError::UnknownType(_) => "unknown_type",
            LifecycleError::Unschedulable(_) => "unschedulable_type",
            LifecycleError::NotFound { .. } => "not_found",
            LifecycleError::AlreadyScheduled { .. } => "already_scheduled",
            LifecycleError::Engine(_) => "engine",
            LifecycleError::Validation(_) => "validation",
            LifecycleError::Audit(_) => "audit",
            LifecycleError::Internal(_) => "internal",
        }
    }
}

impl From<RegistryError> for LifecycleError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { entity_type, name } => {
                LifecycleError::NotFound { entity_type, name }
            }
            RegistryError::Validation(_) | RegistryError::AlreadyExists { .. } => {
                LifecycleError::Validation(err.to_string())
            }
            RegistryError::Corrupt(_) | RegistryError::Database(_) | RegistryError::Io(_) => {
                LifecycleError::Internal(err.to_string())
            }
        }
    }
}

impl From<TransactionError> for LifecycleError {
    fn from(err: TransactionError) -> Self {
        LifecycleError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_kinds_map_onto_the_taxonomy() {
        let not_found = RegistryError::NotFound {
            entity_type: EntityType::Feed,
            name: "x".into(),
        };
        assert!(matches!(
            LifecycleError::from(not_found),
            LifecycleError::NotFound { .. }
        ));

        let duplicate = RegistryError::AlreadyExists {
            entity_type: EntityType::Feed,
            name: "x".into(),
        };
        let mapped = LifecycleError::from(duplicate);
        assert!(matches!(mapped, LifecycleError::Validation(_)));
        assert!(mapped.to_string().contains("already exists"));
    }

    #[test]
    fn messages_carry_entity_and_type() {
        let err = LifecycleError::AlreadyScheduled {
            entity_type: EntityType::Feed,
            name: "sales-feed".into(),
        };
        assert_eq!(
            err.to_string(),
            "sales-feed(FEED) is already scheduled with the execution engine"
        );
    }
}
