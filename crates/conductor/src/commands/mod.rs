//! Command handlers and shared wiring.

pub mod lifecycle;
pub mod query;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use conductor_audit::AuditLog;
use conductor_config::{ConductorConfig, EngineKind};
use conductor_engine::{EmbeddedEngine, ExecutionEngine, RemoteEngine, RemoteEngineConfig};
use conductor_lifecycle::{LifecycleCoordinator, LoggedTransactions};
use conductor_registry::{EntityRegistry, SqliteRegistry};
use conductor_types::{ActorContext, ApiResult};

/// Shared context passed to command handlers.
pub struct Context {
    pub coordinator: LifecycleCoordinator,
    pub registry: Arc<dyn EntityRegistry>,
    pub actor: ActorContext,
    pub json_output: bool,
}

impl Context {
    /// Wire collaborators from config.
    pub fn from_config(config: &ConductorConfig, json_output: bool) -> Result<Self> {
        let engine_config = config.engine();
        engine_config.validate()?;

        let registry: Arc<dyn EntityRegistry> = Arc::new(
            SqliteRegistry::open(&config.registry().db_path)
                .context("failed to open entity registry")?,
        );

        let engine: Arc<dyn ExecutionEngine> = match engine_config.kind {
            EngineKind::Embedded => Arc::new(EmbeddedEngine::new()),
            EngineKind::Remote => Arc::new(
                RemoteEngine::new(RemoteEngineConfig {
                    base_url: engine_config.base_url.clone(),
                    timeout: Duration::from_secs(engine_config.timeout_secs),
                })
                .context("failed to create engine client")?,
            ),
        };

        let audit = Arc::new(AuditLog::new(&config.audit().dir));

        let coordinator = LifecycleCoordinator::new(
            registry.clone(),
            engine,
            audit,
            Arc::new(LoggedTransactions::new()),
        );

        let principal = std::env::var("USER").unwrap_or_else(|_| "anonymous".to_string());
        let actor = ActorContext::new(principal).with_source("cli");

        Ok(Self {
            coordinator,
            registry,
            actor,
            json_output,
        })
    }
}

/// Print the operation result and exit non-zero on failure.
pub fn finish(result: ApiResult, ctx: &Context) -> Result<()> {
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_succeeded() {
        println!("{}", result.message);
    } else {
        eprintln!("error: {}", result.message);
    }

    if result.is_succeeded() {
        Ok(())
    } else {
        // Caller-error classification: non-zero exit, message already
        // printed
        std::process::exit(1);
    }
}
