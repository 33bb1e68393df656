//! # Configuration Management
//!
//! Configuration for identifier generation and logging, loaded with the
//! `config` crate and checked with `validator`.

pub mod settings;

pub use settings::{AppConfig, IdentityConfig, ObservabilityConfig, ENV_PREFIX};
