//! # Configuration Settings
//!
//! Defines the configuration structure for the API management core.

use crate::errors::{ApimError, Result};
use crate::services::id_generator::DEFAULT_ID_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;
use validator::Validate;

/// Environment variable prefix for layered configuration (`APIM__IDENTITY__NAMESPACE`)
pub const ENV_PREFIX: &str = "APIM";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Identifier generation configuration
    #[validate(nested)]
    pub identity: IdentityConfig,

    /// Observability configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Environment variables use the `APIM__` prefix with `__` between
    /// sections, e.g. `APIM__OBSERVABILITY__LOG_LEVEL=debug`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(ApimError::from)?;

        if Uuid::parse_str(&self.identity.namespace).is_err() {
            return Err(ApimError::validation_field(
                "Identity namespace must be a UUID",
                "identity.namespace",
            ));
        }

        Ok(())
    }
}

/// Identifier generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IdentityConfig {
    /// UUID namespace deterministic ids are derived under
    #[validate(length(min = 1, message = "Identity namespace cannot be empty"))]
    pub namespace: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { namespace: DEFAULT_ID_NAMESPACE.to_string() }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name attached to log output
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "apim-core".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let service_name =
            std::env::var("APIM_SERVICE_NAME").unwrap_or(defaults.service_name);

        let log_level = std::env::var("APIM_LOG_LEVEL").unwrap_or(defaults.log_level);

        let json_logging = std::env::var("APIM_JSON_LOGGING")
            .map(|s| s.to_lowercase() == "true" || s == "1")
            .unwrap_or(defaults.json_logging);

        Self { service_name, log_level, json_logging }
    }
}
