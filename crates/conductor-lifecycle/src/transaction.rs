//! The transaction envelope.
//!
//! One envelope bounds the side effects of one lifecycle transition:
//! `begin` before the first check, `commit` immediately before
//! returning success, `rollback` on every failure path. The envelope
//! is an explicit handle threaded through the operation, not ambient
//! per-thread state.
//!
//! This is a boundary marker for whatever consistency mechanism the
//! underlying stores provide, not a two-phase commit across the
//! registry and the engine. A crash between the engine mutation and
//! `commit` can leave the two systems inconsistent; reconciliation is
//! an operational concern outside this layer.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("failed to begin transaction: {0}")]
    Begin(String),

    #[error("failed to commit transaction: {0}")]
    Commit(String),

    #[error("failed to roll back transaction: {0}")]
    Rollback(String),
}

/// A live envelope. Consumed by exactly one of `commit` or
/// `rollback`.
#[async_trait]
pub trait Transaction: Send {
    /// Identifier for correlating envelope boundaries in logs.
    fn id(&self) -> Uuid;

    async fn commit(self: Box<Self>) -> Result<(), TransactionError>;

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError>;
}

/// Source of transaction envelopes. One `begin` per lifecycle
/// operation; envelopes are not nested.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Transaction>, TransactionError>;
}

/// Default envelope: marks boundaries in the log under a
/// per-transaction id and provides no durability of its own.
#[derive(Default)]
pub struct LoggedTransactions;

impl LoggedTransactions {
    pub fn new() -> Self {
        Self
    }
}

struct LoggedTransaction {
    id: Uuid,
}

#[async_trait]
impl TransactionManager for LoggedTransactions {
    async fn begin(&self) -> Result<Box<dyn Transaction>, TransactionError> {
        let id = Uuid::new_v4();
        debug!(txn = %id, "transaction begin");
        Ok(Box::new(LoggedTransaction { id }))
    }
}

#[async_trait]
impl Transaction for LoggedTransaction {
    fn id(&self) -> Uuid {
        self.id
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        debug!(txn = %self.id, "transaction commit");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError> {
        warn!(txn = %self.id, "transaction rollback");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn envelopes_get_distinct_ids() {
        let manager = LoggedTransactions::new();
        let a = manager.begin().await.unwrap();
        let b = manager.begin().await.unwrap();
        assert_ne!(a.id(), b.id());
        a.commit().await.unwrap();
        b.rollback().await.unwrap();
    }
}
