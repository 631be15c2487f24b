//! SQLite-backed entity registry.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use conductor_types::{Entity, EntityType};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::gateway::{EntityRegistry, parse_payload};
use crate::{RegistryError, Result};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS entities (
    entity_type  TEXT NOT NULL,
    name         TEXT NOT NULL,
    definition   TEXT NOT NULL,
    submitted_at TEXT NOT NULL,
    PRIMARY KEY (entity_type, name)
);
";

/// Thin repository over SQLite for entity definitions.
///
/// Thread-safe via internal `Mutex<Connection>`.
pub struct SqliteRegistry {
    conn: Mutex<Connection>,
}

impl SqliteRegistry {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn row_to_entity(
        entity_type: EntityType,
        name: String,
        definition: String,
        submitted_at: String,
    ) -> Result<Entity> {
        let definition = serde_json::from_str(&definition)
            .map_err(|e| RegistryError::Corrupt(format!("definition for {name}: {e}")))?;
        let submitted_at = DateTime::parse_from_rfc3339(&submitted_at)
            .map_err(|e| RegistryError::Corrupt(format!("timestamp for {name}: {e}")))?
            .with_timezone(&Utc);
        Ok(Entity {
            entity_type,
            name,
            definition,
            submitted_at,
        })
    }
}

#[async_trait]
impl EntityRegistry for SqliteRegistry {
    async fn resolve(&self, entity_type: EntityType, name: &str) -> Result<Entity> {
        let row: Option<(String, String)> = self
            .conn
            .lock()
            .query_row(
                "SELECT definition, submitted_at FROM entities
                 WHERE entity_type = ?1 AND name = ?2",
                params![entity_type.as_str(), name],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((definition, submitted_at)) => {
                Self::row_to_entity(entity_type, name.to_string(), definition, submitted_at)
            }
            None => Err(RegistryError::NotFound {
                entity_type,
                name: name.to_string(),
            }),
        }
    }

    async fn submit(&self, entity_type: EntityType, payload: &str) -> Result<Entity> {
        let (name, definition) = parse_payload(payload)?;
        let entity = Entity::new(entity_type, name, definition);

        let definition_str = serde_json::to_string(&entity.definition)
            .map_err(|e| RegistryError::Validation(format!("definition not serializable: {e}")))?;

        let inserted = self.conn.lock().execute(
            "INSERT OR IGNORE INTO entities (entity_type, name, definition, submitted_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entity.entity_type.as_str(),
                entity.name,
                definition_str,
                entity.submitted_at.to_rfc3339(),
            ],
        )?;

        if inserted == 0 {
            return Err(RegistryError::AlreadyExists {
                entity_type,
                name: entity.name,
            });
        }

        debug!(entity_type = %entity.entity_type, name = %entity.name, "entity submitted");
        Ok(entity)
    }

    async fn exists(&self, entity_type: EntityType, name: &str) -> Result<bool> {
        let count: i64 = self.conn.lock().query_row(
            "SELECT COUNT(*) FROM entities WHERE entity_type = ?1 AND name = ?2",
            params![entity_type.as_str(), name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    async fn list(&self, entity_type: EntityType) -> Result<Vec<String>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT name FROM entities WHERE entity_type = ?1 ORDER BY name")?;
        let names = stmt
            .query_map(params![entity_type.as_str()], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submit_then_resolve() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        let entity = registry
            .submit(EntityType::Feed, r#"{"name": "sales-feed", "frequency": "hourly"}"#)
            .await
            .unwrap();
        assert_eq!(entity.name, "sales-feed");

        let resolved = registry.resolve(EntityType::Feed, "sales-feed").await.unwrap();
        assert_eq!(resolved.entity_type, EntityType::Feed);
        assert_eq!(resolved.definition["frequency"], "hourly");
    }

    #[tokio::test]
    async fn resolve_unknown_is_not_found() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        let err = registry.resolve(EntityType::Process, "ghost").await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn duplicate_submit_is_rejected() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        registry
            .submit(EntityType::Feed, r#"{"name": "sales-feed"}"#)
            .await
            .unwrap();
        let err = registry
            .submit(EntityType::Feed, r#"{"name": "sales-feed"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn same_name_under_different_type_is_allowed() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        registry
            .submit(EntityType::Feed, r#"{"name": "overlap"}"#)
            .await
            .unwrap();
        registry
            .submit(EntityType::Process, r#"{"name": "overlap"}"#)
            .await
            .unwrap();
        assert!(registry.exists(EntityType::Feed, "overlap").await.unwrap());
        assert!(registry.exists(EntityType::Process, "overlap").await.unwrap());
    }

    #[tokio::test]
    async fn list_is_sorted_and_scoped_by_type() {
        let registry = SqliteRegistry::open_in_memory().unwrap();
        registry.submit(EntityType::Feed, r#"{"name": "b-feed"}"#).await.unwrap();
        registry.submit(EntityType::Feed, r#"{"name": "a-feed"}"#).await.unwrap();
        registry.submit(EntityType::Process, r#"{"name": "proc"}"#).await.unwrap();

        let feeds = registry.list(EntityType::Feed).await.unwrap();
        assert_eq!(feeds, vec!["a-feed".to_string(), "b-feed".to_string()]);
    }

    #[tokio::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");
        {
            let registry = SqliteRegistry::open(&path).unwrap();
            registry.submit(EntityType::Feed, r#"{"name": "persisted"}"#).await.unwrap();
        }
        let registry = SqliteRegistry::open(&path).unwrap();
        assert!(registry.exists(EntityType::Feed, "persisted").await.unwrap());
    }
}
