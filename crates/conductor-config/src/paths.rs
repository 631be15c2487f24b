//! Platform path resolution.

use std::path::PathBuf;

/// Application name for platform directory resolution.
const APP_NAME: &str = "conductor";

/// Default config filename within the config directory.
const USER_CONFIG_FILE: &str = "conductor.toml";

/// The user config directory (`~/.config/conductor` on Linux).
///
/// Falls back to the current directory when the platform reports no
/// config dir (e.g. stripped-down containers).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the user config file.
pub fn config_path() -> PathBuf {
    config_dir().join(USER_CONFIG_FILE)
}

/// The user data directory (`~/.local/share/conductor` on Linux).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Directory for log files.
pub fn log_dir() -> PathBuf {
    config_dir().join("logs")
}
