//! # Structured Logging
//!
//! Installs the global `tracing` subscriber and provides span helpers for
//! import operations.

use crate::config::ObservabilityConfig;
use crate::errors::{ApimError, Result};
use tracing_subscriber::EnvFilter;

/// Create a tracing span around one import of an API bundle.
///
/// ```rust,ignore
/// let span = import_span!("DEFAULT", "petstore");
/// ```
#[macro_export]
macro_rules! import_span {
    ($environment_id:expr, $api_name:expr) => {
        tracing::info_span!(
            "api_import",
            environment_id = %$environment_id,
            api_name = %$api_name,
            import_id = %uuid::Uuid::new_v4()
        )
    };
    ($environment_id:expr, $api_name:expr, $($field:tt)*) => {
        tracing::info_span!(
            "api_import",
            environment_id = %$environment_id,
            api_name = %$api_name,
            import_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ApimError::validation_field(
                format!("Invalid log level '{}': {}", config.log_level, e),
                "observability.log_level",
            )
        }),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed elsewhere
/// (e.g. by a test harness or the embedding application).
pub fn init_logging(config: &ObservabilityConfig) -> Result<bool> {
    let filter = env_filter(config)?;

    let installed = if config.json_logging {
        tracing_subscriber::fmt().json().with_env_filter(filter).try_init().is_ok()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
    };

    if installed {
        tracing::info!(
            service_name = %config.service_name,
            log_level = %config.log_level,
            json_logging = config.json_logging,
            "Logging initialized"
        );
    }

    Ok(installed)
}

/// Log configuration at startup
pub fn log_config_info(config: &crate::config::AppConfig) {
    tracing::info!(
        identity_namespace = %config.identity.namespace,
        log_level = %config.observability.log_level,
        json_logging = config.observability.json_logging,
        "API management core configuration"
    );
}
