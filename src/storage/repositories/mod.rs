//! Repository interfaces for data access
//!
//! The core only reads from persistence. Each module defines the record shape
//! and the query trait the services depend on; adapters live elsewhere.

pub mod api;
pub mod page;
pub mod plan;
pub mod workflow;

pub use api::{ApiQueryRepository, ApiRecord};
pub use page::{PageQueryRepository, PageRecord};
pub use plan::{PlanQueryRepository, PlanRecord};
pub use workflow::WorkflowQueryRepository;
