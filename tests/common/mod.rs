//! Common test utilities for all integration tests.
//!
//! Fixture builders for import bundles and seeded repositories, plus a
//! repository with failing lookups.

#![allow(dead_code)]

use apim_core::domain::{
    ApiDescriptor, ApiId, ApiLifecycleState, CrossId, EnvironmentId, ImportBundle, OriginContext,
    PageDescriptor, PlanDescriptor, PlanStatus, Workflow, WorkflowType,
};
use apim_core::errors::{ApimError, Result};
use apim_core::services::{ApiIdsCalculatorService, UuidIdGenerator};
use apim_core::storage::{
    ApiQueryRepository, ApiRecord, InMemoryRepository, PageQueryRepository, PageRecord,
    PlanQueryRepository, PlanRecord, WorkflowQueryRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

pub fn calculator(repo: InMemoryRepository) -> ApiIdsCalculatorService {
    ApiIdsCalculatorService::with_repository(Arc::new(repo), Arc::new(UuidIdGenerator::default()))
}

pub fn api_descriptor(id: Option<&str>, cross_id: Option<&str>) -> ApiDescriptor {
    ApiDescriptor {
        id: id.map(ApiId::from),
        cross_id: cross_id.map(CrossId::from),
        name: "petstore".to_string(),
        ..Default::default()
    }
}

/// Bundle with a small page tree and two plans, as exported from a source
/// environment.
pub fn petstore_bundle(cross_id: Option<&str>) -> ImportBundle {
    ImportBundle::new(api_descriptor(Some("source-api"), cross_id))
        .with_pages(vec![
            PageDescriptor::new(Some("home"), None).with_cross_id("home"),
            PageDescriptor::new(Some("guide"), Some("home")).with_cross_id("guide"),
            PageDescriptor::new(Some("faq"), Some("guide")).with_cross_id("faq"),
            PageDescriptor::new(Some("terms"), None).with_cross_id("terms"),
        ])
        .with_plans(vec![
            PlanDescriptor::new(Some("free"))
                .with_cross_id("free")
                .with_general_conditions("terms")
                .with_status(PlanStatus::Published),
            PlanDescriptor::new(Some("gold")).with_cross_id("gold"),
        ])
}

/// Persist a recalculated bundle the way the import pipeline would, so a
/// later import can find it by cross id.
pub fn persist(repo: &InMemoryRepository, environment_id: &EnvironmentId, bundle: &ImportBundle) {
    let api = bundle.api.as_ref().expect("bundle has an api");
    let api_id = api.id.clone().expect("api is identified");

    repo.insert_api(ApiRecord {
        id: api_id.clone(),
        environment_id: environment_id.clone(),
        cross_id: api.cross_id.clone(),
        name: api.name.clone(),
        origin: api.origin,
        lifecycle_state: api.lifecycle_state.unwrap_or_default(),
    });
    for page in &bundle.pages {
        repo.insert_page(PageRecord {
            id: page.id.clone().expect("page is identified"),
            api_id: api_id.clone(),
            cross_id: page.cross_id.clone(),
            parent_id: page.parent_id.clone(),
        });
    }
    for plan in &bundle.plans {
        repo.insert_plan(PlanRecord {
            id: plan.id.clone().expect("plan is identified"),
            api_id: api_id.clone(),
            cross_id: plan.cross_id.clone(),
            status: plan.status,
        });
    }
}

pub fn existing_api(id: &str, environment_id: &str, cross_id: &str) -> ApiRecord {
    ApiRecord {
        id: id.into(),
        environment_id: environment_id.into(),
        cross_id: Some(cross_id.into()),
        name: "petstore".to_string(),
        origin: OriginContext::Management,
        lifecycle_state: ApiLifecycleState::Published,
    }
}

/// Repository whose plan lookups always fail; API and page lookups fail on
/// request and otherwise hit `inner`.
#[derive(Debug, Default)]
pub struct FailingRepository {
    pub inner: InMemoryRepository,
    pub fail_api_lookup: bool,
    pub fail_page_lookup: bool,
}

impl FailingRepository {
    pub fn failing_everything() -> Self {
        Self { inner: InMemoryRepository::new(), fail_api_lookup: true, fail_page_lookup: true }
    }

    /// API lookups succeed against `inner`, page and plan lookups fail.
    pub fn failing_children(inner: InMemoryRepository) -> Self {
        Self { inner, fail_api_lookup: false, fail_page_lookup: true }
    }

    /// Only plan lookups fail.
    pub fn failing_plans(inner: InMemoryRepository) -> Self {
        Self { inner, fail_api_lookup: false, fail_page_lookup: false }
    }

    fn unavailable() -> ApimError {
        ApimError::repository("database unavailable")
    }
}

#[async_trait]
impl ApiQueryRepository for FailingRepository {
    async fn find_by_environment_and_cross_id(
        &self,
        environment_id: &EnvironmentId,
        cross_id: &CrossId,
    ) -> Result<Option<ApiRecord>> {
        if self.fail_api_lookup {
            return Err(Self::unavailable());
        }
        self.inner.find_by_environment_and_cross_id(environment_id, cross_id).await
    }
}

#[async_trait]
impl PageQueryRepository for FailingRepository {
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<PageRecord>> {
        if self.fail_page_lookup {
            return Err(Self::unavailable());
        }
        PageQueryRepository::find_by_api(&self.inner, api_id).await
    }
}

#[async_trait]
impl PlanQueryRepository for FailingRepository {
    async fn find_by_api(&self, _api_id: &ApiId) -> Result<Vec<PlanRecord>> {
        Err(Self::unavailable())
    }
}

#[async_trait]
impl WorkflowQueryRepository for FailingRepository {
    async fn find_by_reference_and_type(
        &self,
        _api_id: &ApiId,
        _workflow_type: WorkflowType,
    ) -> Result<Vec<Workflow>> {
        Err(Self::unavailable())
    }
}
