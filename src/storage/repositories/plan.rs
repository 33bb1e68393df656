//! Plan lookups

use crate::domain::{ApiId, CrossId, PlanId, PlanStatus};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Persisted plan of an API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: PlanId,
    pub api_id: ApiId,
    pub cross_id: Option<CrossId>,
    pub status: PlanStatus,
}

/// Read-only plan queries
#[async_trait]
pub trait PlanQueryRepository: Send + Sync {
    /// List every plan attached to an API
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<PlanRecord>>;
}
