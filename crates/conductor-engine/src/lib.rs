//! Execution engine adapters.
//!
//! The execution engine is the orchestrator of record, the system
//! that actually runs scheduled work. This crate defines the adapter
//! boundary ([`ExecutionEngine`]) plus two implementations: an
//! in-process [`EmbeddedEngine`] and an HTTP [`RemoteEngine`].

mod adapter;
mod embedded;
mod error;
mod remote;

pub use adapter::{ExecutionEngine, LifecycleState};
pub use embedded::EmbeddedEngine;
pub use error::{EngineError, Result};
pub use remote::{RemoteEngine, RemoteEngineConfig};
