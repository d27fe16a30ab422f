//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory unless a path is given.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the data file inside the data directory.
pub const DATA_FILE_NAME: &str = "fitness_data.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Location of the workout/goal data file
    pub data_file: PathBuf,
    /// Days covered by the dashboard when no range is given
    pub dashboard_days: u32,
    /// Start with an empty log when the data file cannot be parsed
    pub reset_on_corrupt: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: get_data_dir().join(DATA_FILE_NAME),
            dashboard_days: 30,
            reset_on_corrupt: false,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitlog", "FitLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from `path`, or from the default location.
///
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
