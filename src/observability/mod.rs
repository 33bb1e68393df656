//! # Observability
//!
//! Structured logging through the `tracing` ecosystem.

pub mod logging;

pub use logging::{env_filter, init_logging, log_config_info};
