//! Configuration types for the articles service
//!
//! Settings are merged from, lowest precedence first: built-in defaults,
//! an optional YAML file, then environment variables. The binary applies
//! CLI flags on top of the result.

use secrecy::SecretString;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const API_TOKEN_ENV: &str = "API_TOKEN";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
pub const MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// On-disk configuration format (YAML); every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub api_token: Option<String>,

    #[serde(default)]
    pub bind_addr: Option<SocketAddr>,

    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl ConfigFile {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Fully resolved runtime configuration
///
/// `database_url` and `api_token` are secrets: `Debug` redacts them.
#[derive(Debug)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: SecretString,
    /// Bearer token accepted on mutating routes
    pub api_token: SecretString,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
}

impl AppConfig {
    /// Load from an optional YAML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => ConfigFile::from_file(path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file settings with an environment lookup
    ///
    /// Environment values win over the file. Empty environment values are
    /// treated as unset.
    pub fn resolve<F>(file: ConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let database_url = lookup(DATABASE_URL_ENV)
            .or(file.database_url)
            .ok_or(ConfigError::Missing {
                key: "database_url",
                env: DATABASE_URL_ENV,
            })?;

        let api_token = lookup(API_TOKEN_ENV)
            .or(file.api_token)
            .ok_or(ConfigError::Missing {
                key: "api_token",
                env: API_TOKEN_ENV,
            })?;

        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => parse_value("bind_addr", &raw)?,
            None => match file.bind_addr {
                Some(addr) => addr,
                None => parse_value("bind_addr", DEFAULT_BIND_ADDR)?,
            },
        };

        let max_connections = match lookup(MAX_CONNECTIONS_ENV) {
            Some(raw) => parse_value("max_connections", &raw)?,
            None => file.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "max_connections",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: SecretString::from(database_url),
            api_token: SecretString::from(api_token),
            bind_addr,
            max_connections,
        })
    }

    /// Override the listen address (e.g. from `--bind`)
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: format!("'{}': {}", raw, e),
    })
}
