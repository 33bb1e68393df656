//! Page lookups

use crate::domain::{ApiId, CrossId, PageId};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Persisted documentation page of an API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    pub api_id: ApiId,
    pub cross_id: Option<CrossId>,
    pub parent_id: Option<PageId>,
}

/// Read-only page queries
#[async_trait]
pub trait PageQueryRepository: Send + Sync {
    /// List every page attached to an API
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<PageRecord>>;
}
