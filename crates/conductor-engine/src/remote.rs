//! HTTP adapter for a remote execution engine.
//!
//! Speaks a small JSON protocol:
//! - `GET  {base}/engine/state/{type}/{name}` → `{"state": "ACTIVE"}`
//! - `POST {base}/engine/{action}/{type}/{name}` with the entity
//!   definition as body → 2xx on acceptance
//!
//! Transport failures and non-2xx responses both surface as
//! [`EngineError`]; nothing is retried here.

use std::time::Duration;

use async_trait::async_trait;
use conductor_types::Entity;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::adapter::{ExecutionEngine, LifecycleState};
use crate::{EngineError, Result};

/// Configuration for the remote engine adapter.
#[derive(Debug, Clone)]
pub struct RemoteEngineConfig {
    /// Base URL of the engine service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for RemoteEngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StateResponse {
    state: LifecycleState,
}

/// Engine adapter over HTTP.
pub struct RemoteEngine {
    client: Client,
    config: RemoteEngineConfig,
}

impl RemoteEngine {
    pub fn new(config: RemoteEngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn state_url(&self, entity: &Entity) -> String {
        format!(
            "{}/engine/state/{}/{}",
            self.config.base_url, entity.entity_type, entity.name
        )
    }

    fn action_url(&self, action: &str, entity: &Entity) -> String {
        format!(
            "{}/engine/{}/{}/{}",
            self.config.base_url, action, entity.entity_type, entity.name
        )
    }

    async fn post_action(&self, action: &str, entity: &Entity) -> Result<()> {
        let url = self.action_url(action, entity);
        debug!(%url, "engine call");
        let response = self
            .client
            .post(&url)
            .json(&entity.definition)
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(EngineError::Rejected(format!("HTTP {status}: {body}")))
    }
}

#[async_trait]
impl ExecutionEngine for RemoteEngine {
    async fn is_active(&self, entity: &Entity) -> Result<bool> {
        let response = self
            .client
            .get(self.state_url(entity))
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        let parsed: StateResponse = serde_json::from_str(&body)
            .map_err(|e| EngineError::InvalidResponse(format!("{e}: {body}")))?;
        Ok(parsed.state == LifecycleState::Active)
    }

    async fn schedule(&self, entity: &Entity) -> Result<()> {
        self.post_action("schedule", entity).await
    }

    async fn suspend(&self, entity: &Entity) -> Result<()> {
        self.post_action("suspend", entity).await
    }

    async fn resume(&self, entity: &Entity) -> Result<()> {
        self.post_action("resume", entity).await
    }
}
