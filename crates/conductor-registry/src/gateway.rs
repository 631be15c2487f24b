//! The registry gateway trait and submission payload validation.

use async_trait::async_trait;
use conductor_types::{Entity, EntityType};

use crate::{RegistryError, Result};

/// Gateway to the entity registry.
///
/// Resolves `(type, name)` pairs to canonical entity definitions and
/// accepts new submissions. Implementations own storage; callers hold
/// only transient `Entity` copies.
#[async_trait]
pub trait EntityRegistry: Send + Sync {
    /// Resolve an entity by type and name.
    async fn resolve(&self, entity_type: EntityType, name: &str) -> Result<Entity>;

    /// Validate and store a new entity definition from a raw payload.
    ///
    /// The payload is a JSON document carrying at minimum a non-empty
    /// `name` field. Duplicate `(type, name)` submissions are
    /// rejected.
    async fn submit(&self, entity_type: EntityType, payload: &str) -> Result<Entity>;

    /// Whether an entity with this type and name exists.
    async fn exists(&self, entity_type: EntityType, name: &str) -> Result<bool>;

    /// Names of all entities of the given type.
    async fn list(&self, entity_type: EntityType) -> Result<Vec<String>>;
}

/// Parse a submission payload into `(name, definition)`.
///
/// Shared by registry implementations so that validation behaves the
/// same regardless of backing store.
pub(crate) fn parse_payload(payload: &str) -> Result<(String, serde_json::Value)> {
    let definition: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| RegistryError::Validation(format!("payload is not valid JSON: {e}")))?;

    let name = definition
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            RegistryError::Validation("definition is missing a non-empty 'name' field".to_string())
        })?
        .to_string();

    Ok((name, definition))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_name() {
        let (name, def) = parse_payload(r#"{"name": "sales-feed", "frequency": "hourly"}"#).unwrap();
        assert_eq!(name, "sales-feed");
        assert_eq!(def["frequency"], "hourly");
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = parse_payload("<entity/>").unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[test]
    fn parse_rejects_missing_or_blank_name() {
        assert!(matches!(
            parse_payload(r#"{"frequency": "hourly"}"#).unwrap_err(),
            RegistryError::Validation(_)
        ));
        assert!(matches!(
            parse_payload(r#"{"name": "   "}"#).unwrap_err(),
            RegistryError::Validation(_)
        ));
    }
}
