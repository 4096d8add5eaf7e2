//! Checkout API configuration module.
//!
//! Configuration is layered with the `config` crate:
//!
//! 1. Built-in defaults
//! 2. `checkout.toml` (or the file named by `CHECKOUT_CONFIG`), optional
//! 3. `CHECKOUT_*` environment variables (`CHECKOUT_PORT`, `CHECKOUT_LOG_LEVEL`, ...)
//! 4. `PORT`, for hosts that inject it

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "checkout.toml";

/// Deployment environment. Selects the log format and is reported by
/// `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEnvironment {
    /// Human-readable logs.
    #[default]
    Development,
    /// JSON logs.
    Production,
}

impl fmt::Display for RunEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunEnvironment::Development => write!(f, "development"),
            RunEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Checkout API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP port
    pub port: u16,

    /// Bind address
    pub bind_addr: String,

    /// Deployment environment
    pub environment: RunEnvironment,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Directory holding index.html, docs.html and the form assets
    pub public_dir: PathBuf,

    /// Name reported by `/health`
    pub service_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 3000,
            bind_addr: "0.0.0.0".to_string(),
            environment: RunEnvironment::Development,
            log_level: "info".to_string(),
            public_dir: PathBuf::from("public"),
            service_name: "Checkout API".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from defaults, file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var("CHECKOUT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load configuration using `path` as the optional config file.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config: ApiConfig = Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("environment", defaults.environment.to_string())?
            .set_default("log_level", defaults.log_level)?
            .set_default("public_dir", defaults.public_dir.to_string_lossy().into_owned())?
            .set_default("service_name", defaults.service_name)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CHECKOUT"))
            .set_override_option("port", env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system does not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.public_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("public_dir".to_string()));
        }

        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bind_addr".to_string()));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Returns the full bind address. `bind_addr` is an IPv4 or IPv6 literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("bind_addr".to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
}
