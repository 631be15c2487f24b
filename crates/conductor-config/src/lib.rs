//! Configuration system for the Conductor lifecycle coordinator.
//!
//! TOML-based configuration with optional sections over defaults:
//! registry storage, audit trail location, execution engine selection,
//! and logging. Discovery checks the XDG user config dir; an explicit
//! path (CLI `--config`) bypasses discovery.

pub mod error;
pub mod paths;
pub mod types;

use std::path::Path;

pub use error::{ConfigError, Result};
pub use paths::{config_dir, config_path, data_dir, log_dir};
pub use types::{
    AuditConfig, ConductorConfig, EngineConfig, EngineKind, LoggingConfig, RegistryConfig,
};

/// Load config from a specific file path (no discovery).
pub fn load_config_file(path: &Path) -> Result<ConductorConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    ConductorConfig::from_toml(&contents)
}

/// Load config from the user config dir, or defaults when absent.
///
/// A missing file is not an error; a present-but-malformed file is.
pub fn load_config() -> Result<ConductorConfig> {
    let path = config_path();
    if path.exists() {
        load_config_file(&path)
    } else {
        Ok(ConductorConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conductor.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[logging]\nlevel = \"debug\"").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.logging().level, "debug");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conductor.toml");
        std::fs::write(&path, "[engine\nkind=").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
