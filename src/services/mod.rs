//! Business logic services
//!
//! - `api_ids`: identifier recalculation for imported API bundles
//! - `lifecycle`: lifecycle state change validation
//! - `id_generator`: random and deterministic identifier strategies

pub mod api_ids;
pub mod id_generator;
pub mod lifecycle;

pub use api_ids::ApiIdsCalculatorService;
pub use id_generator::{IdGenerator, UuidIdGenerator, DEFAULT_ID_NAMESPACE};
pub use lifecycle::{deprecate_active_plans, ApiLifecycleService};
