//! # Service Configuration
//!
//! Layered configuration: struct defaults, then an optional TOML file named
//! by `TASK_STATUS_CONFIG_PATH`, then environment variable overrides.
//! A `.env` file is loaded first if present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Top-level service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Web server configuration
    #[serde(default)]
    pub web: WebConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Address to bind the web server to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            web: WebConfig::default(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration for the current process
    ///
    /// Loads `.env` if present (silently ignored if not found), reads the
    /// TOML file named by `TASK_STATUS_CONFIG_PATH` when that variable is
    /// set, then applies `APP_ENV`, `BIND_ADDRESS` and `REQUEST_TIMEOUT_MS`
    /// overrides.
    pub fn load() -> ServiceResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var("TASK_STATUS_CONFIG_PATH") {
            Ok(path) => Self::load_from_path(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_path(path: &Path) -> ServiceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: ServiceConfig = toml::from_str(&contents)?;

        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values
    fn apply_env_overrides(&mut self) -> ServiceResult<()> {
        if let Ok(environment) = std::env::var("APP_ENV") {
            self.environment = environment;
        }

        if let Ok(bind_address) = std::env::var("BIND_ADDRESS") {
            self.web.bind_address = bind_address;
        }

        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_MS") {
            self.web.request_timeout_ms = timeout
                .parse()
                .map_err(|e| ServiceError::configuration(format!("Invalid REQUEST_TIMEOUT_MS: {e}")))?;
        }

        Ok(())
    }

    /// Validate loaded values
    pub fn validate(&self) -> ServiceResult<()> {
        if self.web.bind_address.is_empty() {
            return Err(ServiceError::configuration("bind_address must not be empty"));
        }

        if self.web.request_timeout_ms == 0 {
            return Err(ServiceError::configuration(
                "request_timeout_ms must be greater than zero",
            ));
        }

        Ok(())
    }
}
