//! Configuration loader for Careline.
//!
//! Reads a TOML file (`careline.toml` by default) into [`AppConfig`].
//! [`load_config`] falls back to defaults when the file is missing or
//! malformed; [`read_config`] is the strict variant used when the operator
//! names a file explicitly.

use std::path::Path;

use careline_types::config::AppConfig;
use careline_types::error::ConfigError;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "careline.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Load configuration from `path`, failing if it is missing or invalid.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] with the path and the I/O or TOML error.
pub async fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let read_error = |message: String| ConfigError::Read {
        path: path.display().to_string(),
        message,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| read_error(e.to_string()))?;

    toml::from_str::<AppConfig>(&content).map_err(|e| read_error(e.to_string()))
}
