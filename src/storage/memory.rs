//! In-memory repository
//!
//! A `DashMap`-backed adapter implementing every query trait. It backs the
//! test suites and lets embedders run identifier recalculation without a
//! database.

use crate::domain::{
    ApiId, CrossId, EnvironmentId, PageId, PlanId, Workflow, WorkflowId, WorkflowType,
};
use crate::errors::Result;
use crate::storage::repositories::{
    ApiQueryRepository, ApiRecord, PageQueryRepository, PageRecord, PlanQueryRepository,
    PlanRecord, WorkflowQueryRepository,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::instrument;

/// Shared in-memory store for APIs, pages, plans and workflows
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    apis: Arc<DashMap<ApiId, ApiRecord>>,
    pages: Arc<DashMap<PageId, PageRecord>>,
    plans: Arc<DashMap<PlanId, PlanRecord>>,
    workflows: Arc<DashMap<WorkflowId, Workflow>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_api(&self, api: ApiRecord) {
        self.apis.insert(api.id.clone(), api);
    }

    pub fn insert_page(&self, page: PageRecord) {
        self.pages.insert(page.id.clone(), page);
    }

    pub fn insert_plan(&self, plan: PlanRecord) {
        self.plans.insert(plan.id.clone(), plan);
    }

    pub fn insert_workflow(&self, workflow: Workflow) {
        self.workflows.insert(workflow.id.clone(), workflow);
    }

    pub fn api_count(&self) -> usize {
        self.apis.len()
    }
}

#[async_trait]
impl ApiQueryRepository for InMemoryRepository {
    #[instrument(skip(self), name = "memory_find_api_by_cross_id")]
    async fn find_by_environment_and_cross_id(
        &self,
        environment_id: &EnvironmentId,
        cross_id: &CrossId,
    ) -> Result<Option<ApiRecord>> {
        Ok(self
            .apis
            .iter()
            .find(|entry| {
                entry.environment_id == *environment_id
                    && entry.cross_id.as_ref() == Some(cross_id)
            })
            .map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl PageQueryRepository for InMemoryRepository {
    #[instrument(skip(self), name = "memory_find_pages_by_api")]
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<PageRecord>> {
        Ok(self
            .pages
            .iter()
            .filter(|entry| entry.api_id == *api_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait]
impl PlanQueryRepository for InMemoryRepository {
    #[instrument(skip(self), name = "memory_find_plans_by_api")]
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<PlanRecord>> {
        Ok(self
            .plans
            .iter()
            .filter(|entry| entry.api_id == *api_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait]
impl WorkflowQueryRepository for InMemoryRepository {
    #[instrument(skip(self), name = "memory_find_workflows")]
    async fn find_by_reference_and_type(
        &self,
        api_id: &ApiId,
        workflow_type: WorkflowType,
    ) -> Result<Vec<Workflow>> {
        let mut workflows: Vec<Workflow> = self
            .workflows
            .iter()
            .filter(|entry| entry.reference_id == *api_id && entry.workflow_type == workflow_type)
            .map(|entry| entry.value().clone())
            .collect();
        workflows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workflows)
    }
}
