//! Type capability gate.

use conductor_types::{EntityType, UnknownEntityType};

use crate::{LifecycleError, Result};

/// Resolve a raw type token without requiring scheduling capability.
pub fn parse_type(raw: &str) -> Result<EntityType> {
    raw.parse()
        .map_err(|UnknownEntityType(token)| LifecycleError::UnknownType(token))
}

/// Resolve a raw type token and require that the type supports
/// lifecycle operations.
///
/// This is the first check in every transition: it runs before the
/// audit append and before any registry or engine call, so
/// unsupported types never generate audit noise or external calls.
pub fn check_schedulable(raw: &str) -> Result<EntityType> {
    let entity_type = parse_type(raw)?;
    if !entity_type.schedulable() {
        return Err(LifecycleError::Unschedulable(entity_type));
    }
    Ok(entity_type)
}
