//! In-memory audit recorder for assertions in tests.

use async_trait::async_trait;
use conductor_types::AuditRecord;
use parking_lot::Mutex;

use crate::recorder::AuditRecorder;
use crate::Result;

#[derive(Default)]
pub struct MemoryAudit {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl AuditRecorder for MemoryAudit {
    async fn append(&self, record: AuditRecord) -> Result<()> {
        self.records.lock().push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conductor_types::{ActorContext, EntityType, LifecycleAction};

    #[tokio::test]
    async fn collects_in_order() {
        let audit = MemoryAudit::new();
        assert!(audit.is_empty());

        for action in [LifecycleAction::Schedule, LifecycleAction::Resume] {
            audit
                .append(AuditRecord::new(
                    "n",
                    EntityType::Process,
                    action,
                    ActorContext::new("t"),
                ))
                .await
                .unwrap();
        }

        let records = audit.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, LifecycleAction::Schedule);
        assert_eq!(records[1].action, LifecycleAction::Resume);
    }
}
