//! # Storage
//!
//! Lookup interfaces the services consume, plus an in-memory adapter.
//! Writing entities is the job of the surrounding import pipeline.

pub mod memory;
pub mod repositories;

pub use memory::InMemoryRepository;
pub use repositories::{
    ApiQueryRepository, ApiRecord, PageQueryRepository, PageRecord, PlanQueryRepository,
    PlanRecord, WorkflowQueryRepository,
};
