use conductor_types::EntityType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{name}({entity_type}) is not found in the registry")]
    NotFound { entity_type: EntityType, name: String },

    #[error("{name}({entity_type}) already exists in the registry")]
    AlreadyExists { entity_type: EntityType, name: String },

    #[error("invalid entity definition: {0}")]
    Validation(String),

    #[error("corrupt registry record: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
