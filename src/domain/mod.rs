//! Domain layer
//!
//! Pure domain entities and business rules with zero infrastructure
//! dependencies: typed identifiers, the import bundle that identifier
//! recalculation works on, and the API lifecycle transition table.
//!
//! ## Module Organization
//!
//! - `id`: Type-safe domain identifiers with NewType pattern
//! - `api`, `page`, `plan`: descriptors of an imported API definition
//! - `import`: the bundle aggregating them
//! - `lifecycle`: lifecycle states and transition rules
//! - `workflow`: review workflow records

pub mod api;
pub mod id;
pub mod import;
pub mod lifecycle;
pub mod page;
pub mod plan;
pub mod workflow;

pub use api::{ApiDescriptor, OriginContext};
pub use id::{non_blank, ApiId, CrossId, EnvironmentId, PageId, PlanId, WorkflowId};
pub use import::ImportBundle;
pub use lifecycle::{
    transition_rule, validate_federated_transition, ApiLifecycleState, TransitionRule,
};
pub use page::PageDescriptor;
pub use plan::{PlanDescriptor, PlanStatus};
pub use workflow::{Workflow, WorkflowState, WorkflowType};
