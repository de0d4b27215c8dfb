pub mod model;

use crate::error::{ConfigError, ConfigResult};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig, RatingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starling")
        .join("config.toml")
}

/// Parse and validate a TOML config document.
pub fn parse_config(contents: &str) -> ConfigResult<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    config.rating.validate()?;
    Ok(config)
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> ConfigResult<AppConfig> {
    let path = config_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents)
}

pub fn save_config(config: &AppConfig) -> ConfigResult<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(&path, contents).map_err(|source| ConfigError::Write { path, source })?;
    Ok(())
}
