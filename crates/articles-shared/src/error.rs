//! Error types for configuration loading

use thiserror::Error;

/// Error raised while assembling [`crate::AppConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting '{key}' (set {env} or add '{key}' to the config file)")]
    Missing {
        key: &'static str,
        env: &'static str,
    },

    #[error("Invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
