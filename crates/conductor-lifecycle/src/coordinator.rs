//! The lifecycle coordinator.
//!
//! Orchestrates one transition at a time: capability gate → audit
//! intent → registry resolution → engine call, all inside a
//! transaction envelope. The coordinator is stateless: entity and
//! engine state are re-resolved on every call, never cached.

use std::sync::Arc;

use conductor_audit::AuditRecorder;
use conductor_engine::ExecutionEngine;
use conductor_registry::EntityRegistry;
use conductor_types::{
    ActorContext, ApiResult, AuditRecord, Entity, LifecycleAction, STREAMED_PAYLOAD,
};
use tracing::{Instrument, error, info, info_span};

use crate::capability::{check_schedulable, parse_type};
use crate::transaction::TransactionManager;
use crate::{LifecycleError, Result};

/// Coordinates entity lifecycle transitions against the execution
/// engine.
///
/// All collaborators are injected at construction; there are no
/// global accessors. Clone-cheap via `Arc`.
#[derive(Clone)]
pub struct LifecycleCoordinator {
    registry: Arc<dyn EntityRegistry>,
    engine: Arc<dyn ExecutionEngine>,
    audit: Arc<dyn AuditRecorder>,
    transactions: Arc<dyn TransactionManager>,
}

impl LifecycleCoordinator {
    pub fn new(
        registry: Arc<dyn EntityRegistry>,
        engine: Arc<dyn ExecutionEngine>,
        audit: Arc<dyn AuditRecorder>,
        transactions: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            registry,
            engine,
            audit,
            transactions,
        }
    }

    // ── Public operations ───────────────────────────────────────────

    /// Place a submitted entity under engine control.
    ///
    /// The active check and the engine call are not atomic: two
    /// concurrent schedules of the same entity can both observe an
    /// inactive entity and both reach the engine. The engine's own
    /// transition rules are the last line of defense.
    pub async fn schedule(&self, raw_type: &str, name: &str, actor: &ActorContext) -> ApiResult {
        let span = info_span!("schedule", entity_type = raw_type, entity = name);
        self.enveloped(self.schedule_inner(raw_type, name, actor))
            .instrument(span)
            .await
    }

    /// Validate and store a new entity definition, then schedule it
    /// immediately.
    pub async fn submit_and_schedule(
        &self,
        raw_type: &str,
        payload: &str,
        actor: &ActorContext,
    ) -> ApiResult {
        let span = info_span!("submit_and_schedule", entity_type = raw_type);
        self.enveloped(self.submit_and_schedule_inner(raw_type, payload, actor))
            .instrument(span)
            .await
    }

    /// Pause a running entity. Engine state is not pre-checked here;
    /// the engine rejects invalid transitions itself.
    pub async fn suspend(&self, raw_type: &str, name: &str, actor: &ActorContext) -> ApiResult {
        let span = info_span!("suspend", entity_type = raw_type, entity = name);
        self.enveloped(self.suspend_inner(raw_type, name, actor))
            .instrument(span)
            .await
    }

    /// Resume a suspended entity. Symmetric to [`suspend`](Self::suspend).
    pub async fn resume(&self, raw_type: &str, name: &str, actor: &ActorContext) -> ApiResult {
        let span = info_span!("resume", entity_type = raw_type, entity = name);
        self.enveloped(self.resume_inner(raw_type, name, actor))
            .instrument(span)
            .await
    }

    /// Validate and store a new entity definition without scheduling
    /// it. Unschedulable types (clusters) are accepted here.
    pub async fn submit(&self, raw_type: &str, payload: &str, actor: &ActorContext) -> ApiResult {
        let span = info_span!("submit", entity_type = raw_type);
        self.enveloped(self.submit_inner(raw_type, payload, actor))
            .instrument(span)
            .await
    }

    /// Report whether the engine currently runs this entity.
    /// Read-only: no envelope, no audit record.
    pub async fn status(&self, raw_type: &str, name: &str) -> ApiResult {
        match self.status_inner(raw_type, name).await {
            Ok(message) => ApiResult::succeeded(message),
            Err(err) => self.translate(err),
        }
    }

    // ── Envelope and boundary translation ───────────────────────────

    /// Run one transition inside a transaction envelope: commit on
    /// the success path, roll back on every failure, translate any
    /// failure to the uniform caller-facing shape.
    async fn enveloped<F>(&self, operation: F) -> ApiResult
    where
        F: Future<Output = Result<String>>,
    {
        let txn = match self.transactions.begin().await {
            Ok(txn) => txn,
            Err(err) => return self.translate(err.into()),
        };

        match operation.await {
            Ok(message) => {
                if let Err(err) = txn.commit().await {
                    return self.translate(err.into());
                }
                info!(%message, "transition committed");
                ApiResult::succeeded(message)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "rollback failed after aborted transition");
                }
                self.translate(err)
            }
        }
    }

    /// Map an internal failure to the caller-facing shape. The kind
    /// is preserved in logs only.
    fn translate(&self, err: LifecycleError) -> ApiResult {
        error!(kind = err.kind(), error = %err, "lifecycle operation failed");
        ApiResult::failed(err.to_string())
    }

    // ── Operation bodies ────────────────────────────────────────────

    async fn schedule_inner(
        &self,
        raw_type: &str,
        name: &str,
        actor: &ActorContext,
    ) -> Result<String> {
        let entity_type = check_schedulable(raw_type)?;
        self.audit
            .append(AuditRecord::new(
                name,
                entity_type,
                LifecycleAction::Schedule,
                actor.clone(),
            ))
            .await?;
        let entity = self.registry.resolve(entity_type, name).await?;
        self.schedule_resolved(&entity).await?;
        Ok(format!("{name}({entity_type}) scheduled successfully"))
    }

    async fn submit_and_schedule_inner(
        &self,
        raw_type: &str,
        payload: &str,
        actor: &ActorContext,
    ) -> Result<String> {
        let entity_type = check_schedulable(raw_type)?;
        // The definition is still an unparsed stream here, so the
        // audit line carries the sentinel in the name slot.
        self.audit
            .append(AuditRecord::new(
                STREAMED_PAYLOAD,
                entity_type,
                LifecycleAction::SubmitAndSchedule,
                actor.clone(),
            ))
            .await?;
        let entity = self.registry.submit(entity_type, payload).await?;
        self.schedule_resolved(&entity).await?;
        Ok(format!(
            "{}({entity_type}) scheduled successfully",
            entity.name
        ))
    }

    async fn suspend_inner(
        &self,
        raw_type: &str,
        name: &str,
        actor: &ActorContext,
    ) -> Result<String> {
        let entity_type = check_schedulable(raw_type)?;
        self.audit
            .append(AuditRecord::new(
                name,
                entity_type,
                LifecycleAction::Suspend,
                actor.clone(),
            ))
            .await?;
        let entity = self.registry.resolve(entity_type, name).await?;
        self.engine.suspend(&entity).await?;
        Ok(format!("{name}({entity_type}) suspended successfully"))
    }

    async fn resume_inner(
        &self,
        raw_type: &str,
        name: &str,
        actor: &ActorContext,
    ) -> Result<String> {
        let entity_type = check_schedulable(raw_type)?;
        self.audit
            .append(AuditRecord::new(
                name,
                entity_type,
                LifecycleAction::Resume,
                actor.clone(),
            ))
            .await?;
        let entity = self.registry.resolve(entity_type, name).await?;
        self.engine.resume(&entity).await?;
        Ok(format!("{name}({entity_type}) resumed successfully"))
    }

    async fn submit_inner(
        &self,
        raw_type: &str,
        payload: &str,
        actor: &ActorContext,
    ) -> Result<String> {
        let entity_type = parse_type(raw_type)?;
        self.audit
            .append(AuditRecord::new(
                STREAMED_PAYLOAD,
                entity_type,
                LifecycleAction::Submit,
                actor.clone(),
            ))
            .await?;
        let entity = self.registry.submit(entity_type, payload).await?;
        Ok(format!(
            "{}({entity_type}) submitted successfully",
            entity.name
        ))
    }

    async fn status_inner(&self, raw_type: &str, name: &str) -> Result<String> {
        let entity_type = parse_type(raw_type)?;
        let entity = self.registry.resolve(entity_type, name).await?;
        let active = self.engine.is_active(&entity).await?;
        Ok(if active {
            format!("{name}({entity_type}) is ACTIVE")
        } else {
            format!("{name}({entity_type}) is not scheduled")
        })
    }

    /// Shared tail of the schedule paths: never mutate an entity the
    /// engine already reports active.
    async fn schedule_resolved(&self, entity: &Entity) -> Result<()> {
        if self.engine.is_active(entity).await? {
            return Err(LifecycleError::AlreadyScheduled {
                entity_type: entity.entity_type,
                name: entity.name.clone(),
            });
        }
        self.engine.schedule(entity).await?;
        Ok(())
    }
}
