//! Entity registry gateway: resolves and stores entity definitions.
//!
//! The registry is the system of record for entity definitions.
//! Lifecycle coordination treats it as a gateway: `resolve` a
//! `(type, name)` pair to a canonical [`Entity`](conductor_types::Entity),
//! or `submit` a raw JSON payload which is validated and stored.
//!
//! Two implementations: [`SqliteRegistry`] for durable state and
//! [`MemoryRegistry`] for tests and throwaway runs.

mod error;
mod gateway;
mod memory;
mod sqlite;

pub use error::{RegistryError, Result};
pub use gateway::EntityRegistry;
pub use memory::MemoryRegistry;
pub use sqlite::SqliteRegistry;
