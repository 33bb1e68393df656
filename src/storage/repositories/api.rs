//! API lookups

use crate::domain::{ApiId, ApiLifecycleState, CrossId, EnvironmentId, OriginContext};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Persisted view of an API, as far as identity resolution needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRecord {
    pub id: ApiId,
    pub environment_id: EnvironmentId,
    pub cross_id: Option<CrossId>,
    pub name: String,
    pub origin: OriginContext,
    pub lifecycle_state: ApiLifecycleState,
}

/// Read-only API queries
#[async_trait]
pub trait ApiQueryRepository: Send + Sync {
    /// Find the API of an environment carrying the given cross id
    async fn find_by_environment_and_cross_id(
        &self,
        environment_id: &EnvironmentId,
        cross_id: &CrossId,
    ) -> Result<Option<ApiRecord>>;
}
