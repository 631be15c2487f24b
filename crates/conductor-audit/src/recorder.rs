//! The audit recorder trait.

use async_trait::async_trait;
use conductor_types::AuditRecord;

use crate::Result;

/// Sink for the immutable audit trail.
///
/// Appends are part of a transition's contract, not best-effort: a
/// failed append aborts the transition that requested it.
#[async_trait]
pub trait AuditRecorder: Send + Sync {
    /// Append one record to the trail.
    async fn append(&self, record: AuditRecord) -> Result<()>;
}
