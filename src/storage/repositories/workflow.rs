//! Workflow lookups

use crate::domain::{ApiId, Workflow, WorkflowType};
use crate::errors::Result;
use async_trait::async_trait;

/// Read-only workflow queries
#[async_trait]
pub trait WorkflowQueryRepository: Send + Sync {
    /// List the workflows of a type attached to an API, most recent first
    async fn find_by_reference_and_type(
        &self,
        api_id: &ApiId,
        workflow_type: WorkflowType,
    ) -> Result<Vec<Workflow>>;
}
