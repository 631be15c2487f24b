//! Configuration types mapping to the TOML schema.
//!
//! Top-level config:
//! ```toml
//! [registry]               # entity registry storage
//! [audit]                  # audit trail location
//! [engine]                 # execution engine selection
//! [logging]                # log level
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration structure.
///
/// Maps to the full TOML config file. All sections are optional so
/// that partial configs can be loaded over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConductorConfig {
    /// Entity registry storage settings.
    pub registry: Option<RegistryConfig>,

    /// Audit trail settings.
    pub audit: Option<AuditConfig>,

    /// Execution engine selection.
    pub engine: Option<EngineConfig>,

    /// Logging settings.
    pub logging: Option<LoggingConfig>,
}

impl ConductorConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Registry settings with defaults applied.
    pub fn registry(&self) -> RegistryConfig {
        self.registry.clone().unwrap_or_default()
    }

    /// Audit settings with defaults applied.
    pub fn audit(&self) -> AuditConfig {
        self.audit.clone().unwrap_or_default()
    }

    /// Engine settings with defaults applied.
    pub fn engine(&self) -> EngineConfig {
        self.engine.clone().unwrap_or_default()
    }

    /// Logging settings with defaults applied.
    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

/// Entity registry storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            db_path: crate::paths::data_dir().join("registry.db"),
        }
    }
}

/// Audit trail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory holding the append-only JSONL audit files.
    pub dir: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            dir: crate::paths::data_dir().join("audit"),
        }
    }
}

/// Which execution engine adapter to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// In-process engine. Lifecycle state lives and dies with the
    /// process; useful for local runs and tests.
    Embedded,
    /// HTTP adapter against a remote engine service.
    Remote,
}

/// Execution engine selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub kind: EngineKind,
    /// Base URL of the remote engine service. Ignored for the
    /// embedded engine.
    pub base_url: String,
    /// Per-request timeout for the remote adapter, in seconds.
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: EngineKind::Embedded,
            base_url: "http://localhost:9090".to_string(),
            timeout_secs: 30,
        }
    }
}

impl EngineConfig {
    /// Check that the section is usable for the selected kind.
    pub fn validate(&self) -> crate::Result<()> {
        if self.kind == EngineKind::Remote && self.base_url.trim().is_empty() {
            return Err(crate::ConfigError::Invalid {
                field: "engine.base_url".to_string(),
                reason: "a remote engine needs a base URL".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(crate::ConfigError::Invalid {
                field: "engine.timeout_secs".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env-filter style level directive (e.g. "info", "conductor=debug").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
