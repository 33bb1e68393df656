//! # apim-core
//!
//! Identity and lifecycle core of an API management plane.
//!
//! ## Architecture
//!
//! ```text
//! import pipeline ──> ApiIdsCalculatorService ──> (persistence, out of crate)
//!                            │
//!                     lookup repositories
//!
//! API update ──────> ApiLifecycleService ──> workflow repository
//! ```
//!
//! ## Core Components
//!
//! - **Identifier recalculation**: re-identifies an imported API bundle for an
//!   environment, either by reusing the identity of an API with the same cross
//!   id or by deriving ids deterministically from the definition.
//! - **Lifecycle validation**: guards changes of the portal lifecycle state.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use apim_core::domain::{ApiDescriptor, ImportBundle};
//! use apim_core::services::{ApiIdsCalculatorService, UuidIdGenerator};
//! use apim_core::storage::InMemoryRepository;
//!
//! # async fn run() -> apim_core::Result<()> {
//! let service = ApiIdsCalculatorService::with_repository(
//!     Arc::new(InMemoryRepository::new()),
//!     Arc::new(UuidIdGenerator::default()),
//! );
//! let mut bundle = ImportBundle::new(ApiDescriptor::default());
//! service.recalculate(&"DEFAULT".into(), &mut bundle).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod services;
pub mod storage;

// Re-export commonly used types and traits
pub use config::AppConfig;
pub use errors::{ApimError, Result};
pub use observability::init_logging;
pub use services::{ApiIdsCalculatorService, ApiLifecycleService};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
