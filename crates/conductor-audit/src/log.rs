//! Append-only JSONL audit log. One file per UTC day.
//!
//! Layout: `{dir}/audit-{YYYY-MM-DD}.jsonl`

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use conductor_types::AuditRecord;
use tracing::debug;

use crate::recorder::AuditRecorder;
use crate::Result;

pub struct AuditLog {
    dir: PathBuf,
}

impl AuditLog {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Path of the log file for a given day.
    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("audit-{}.jsonl", date.format("%Y-%m-%d")))
    }

    /// Read back all records for a given day. Absent file reads as
    /// empty.
    pub fn read_day(&self, date: NaiveDate) -> Result<Vec<AuditRecord>> {
        let path = self.file_path(date);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: AuditRecord = serde_json::from_str(&line)?;
            records.push(record);
        }

        Ok(records)
    }
}

#[async_trait]
impl AuditRecorder for AuditLog {
    async fn append(&self, record: AuditRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.file_path(Utc::now().date_naive());
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        file.write_all(line.as_bytes())?;
        // Ensure the record is on disk before the transition proceeds
        file.sync_all()?;

        debug!(
            entity = %record.entity_name,
            entity_type = %record.entity_type,
            action = %record.action,
            "audit appended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conductor_types::{ActorContext, EntityType, LifecycleAction};

    #[tokio::test]
    async fn append_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.append(AuditRecord::new(
            "sales-feed",
            EntityType::Feed,
            LifecycleAction::Schedule,
            ActorContext::new("ops"),
        ))
        .await
        .unwrap();
        log.append(AuditRecord::new(
            "sales-feed",
            EntityType::Feed,
            LifecycleAction::Suspend,
            ActorContext::new("ops"),
        ))
        .await
        .unwrap();

        let records = log.read_day(Utc::now().date_naive()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, LifecycleAction::Schedule);
        assert_eq!(records[1].action, LifecycleAction::Suspend);
    }

    #[tokio::test]
    async fn absent_day_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path());
        let records = log
            .read_day(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap())
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn file_name_is_date_partitioned() {
        let log = AuditLog::new(Path::new("/var/lib/conductor/audit"));
        let path = log.file_path(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(
            path,
            PathBuf::from("/var/lib/conductor/audit/audit-2026-08-06.jsonl")
        );
    }
}
