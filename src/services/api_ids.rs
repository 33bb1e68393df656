//! API identifier recalculation
//!
//! Imported definitions carry the ids they had where they were exported. Before
//! anything is persisted, the bundle is re-identified for the target
//! environment:
//!
//! - **cross id**: the API already exists in this environment under the same
//!   cross id, so it keeps that identity and pages/plans are matched by their
//!   own cross ids.
//! - **definition ids**: ids are derived deterministically from the
//!   environment and the original ids, unless the API is owned by Kubernetes.
//!
//! Both strategies first build a page `old id -> new id` table, then apply it
//! to page parents and plan general conditions. Whatever is still missing an
//! id afterwards gets a random one.

use crate::domain::{
    non_blank, ApiId, CrossId, EnvironmentId, ImportBundle, PageDescriptor, PageId,
    PlanDescriptor, PlanId,
};
use crate::errors::{ApimError, Result};
use crate::services::id_generator::IdGenerator;
use crate::storage::repositories::{
    ApiQueryRepository, PageQueryRepository, PlanQueryRepository,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Re-identifies imported API bundles for an environment.
#[derive(Clone)]
pub struct ApiIdsCalculatorService {
    api_query: Arc<dyn ApiQueryRepository>,
    page_query: Arc<dyn PageQueryRepository>,
    plan_query: Arc<dyn PlanQueryRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ApiIdsCalculatorService {
    pub fn new(
        api_query: Arc<dyn ApiQueryRepository>,
        page_query: Arc<dyn PageQueryRepository>,
        plan_query: Arc<dyn PlanQueryRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { api_query, page_query, plan_query, id_generator }
    }

    /// Build the service from a single adapter serving every lookup.
    pub fn with_repository<R>(repository: Arc<R>, id_generator: Arc<dyn IdGenerator>) -> Self
    where
        R: ApiQueryRepository + PageQueryRepository + PlanQueryRepository + 'static,
    {
        Self::new(repository.clone(), repository.clone(), repository, id_generator)
    }

    /// Recalculate the ids of a freshly imported bundle.
    ///
    /// Fails with [`ApimError::MissingApi`] before touching anything when the
    /// bundle has no API. On success every page and plan has a non-blank id.
    #[instrument(
        skip(self, bundle),
        fields(environment_id = %environment_id),
        name = "recalculate_api_ids"
    )]
    pub async fn recalculate<'a>(
        &self,
        environment_id: &EnvironmentId,
        bundle: &'a mut ImportBundle,
    ) -> Result<&'a mut ImportBundle> {
        let api = bundle.api.as_ref().ok_or(ApimError::MissingApi)?;
        let cross_id = non_blank(&api.cross_id).cloned();
        let origin = api.origin;

        let existing = match &cross_id {
            Some(cross_id) => {
                self.api_query.find_by_environment_and_cross_id(environment_id, cross_id).await?
            }
            None => None,
        };

        match existing {
            Some(existing) => {
                info!(
                    api_id = %existing.id,
                    cross_id = ?cross_id,
                    "Reusing identity of existing API"
                );
                self.recalculate_ids_from_cross_id(existing.id, bundle).await?;
            }
            None if origin.can_recalculate_ids() => {
                self.recalculate_ids_from_definition_ids(environment_id, bundle);
                info!(
                    api_id = ?bundle.api.as_ref().and_then(|api| api.id.as_ref()),
                    "Derived API ids from definition"
                );
            }
            None => {
                info!(origin = %origin, "Keeping definition ids of externally managed API");
            }
        }

        self.generate_empty_ids(bundle);
        Ok(bundle)
    }

    /// Recalculate ids for an import that may target an existing API.
    ///
    /// When `target_api_id` is set the API is already identified: it takes that
    /// id and only blank page/plan ids are filled in.
    #[instrument(
        skip(self, bundle),
        fields(environment_id = %environment_id),
        name = "recalculate_api_ids_for_target"
    )]
    pub async fn recalculate_for_target<'a>(
        &self,
        environment_id: &EnvironmentId,
        target_api_id: Option<&ApiId>,
        bundle: &'a mut ImportBundle,
    ) -> Result<&'a mut ImportBundle> {
        let Some(target_api_id) = target_api_id.filter(|id| !id.is_blank()) else {
            return self.recalculate(environment_id, bundle).await;
        };

        let api = bundle.api.as_mut().ok_or(ApimError::MissingApi)?;
        api.id = Some(target_api_id.clone());
        debug!(api_id = %target_api_id, "Import targets an identified API");

        self.generate_empty_ids(bundle);
        Ok(bundle)
    }

    async fn recalculate_ids_from_cross_id(
        &self,
        api_id: ApiId,
        bundle: &mut ImportBundle,
    ) -> Result<()> {
        // Both lookups complete before the bundle is touched.
        let existing_pages: HashMap<CrossId, PageId> = self
            .page_query
            .find_by_api(&api_id)
            .await?
            .into_iter()
            .filter_map(|page| {
                non_blank(&page.cross_id).cloned().map(|cross_id| (cross_id, page.id))
            })
            .collect();

        let existing_plans: HashMap<CrossId, PlanId> = self
            .plan_query
            .find_by_api(&api_id)
            .await?
            .into_iter()
            .filter_map(|plan| {
                non_blank(&plan.cross_id).cloned().map(|cross_id| (cross_id, plan.id))
            })
            .collect();

        if let Some(api) = bundle.api.as_mut() {
            api.id = Some(api_id);
        }

        let page_ids = remap_pages(&mut bundle.pages, |page| {
            non_blank(&page.cross_id).map(|cross_id| {
                existing_pages
                    .get(cross_id)
                    .cloned()
                    .unwrap_or_else(|| PageId::from(self.id_generator.random()))
            })
        });

        remap_general_conditions(&mut bundle.plans, &page_ids);
        remap_plans(&mut bundle.plans, |plan| {
            non_blank(&plan.cross_id).map(|cross_id| {
                existing_plans
                    .get(cross_id)
                    .cloned()
                    .unwrap_or_else(|| PlanId::from(self.id_generator.random()))
            })
        });

        Ok(())
    }

    /// Derive ids from the environment and the definition's own ids.
    ///
    /// A definition without an API id gets a random API id, and its pages and
    /// plans derive from that, so id-less definitions are not stable across
    /// re-imports.
    fn recalculate_ids_from_definition_ids(
        &self,
        environment_id: &EnvironmentId,
        bundle: &mut ImportBundle,
    ) {
        let Some(api) = bundle.api.as_mut() else {
            return;
        };

        // Without an original id there is nothing stable to derive from.
        let new_api_id = match non_blank(&api.id) {
            Some(old_id) => {
                ApiId::from(self.id_generator.deterministic(environment_id, &[old_id.as_str()]))
            }
            None => ApiId::from(self.id_generator.random()),
        };
        api.id = Some(new_api_id.clone());

        let page_ids = remap_pages(&mut bundle.pages, |page| {
            non_blank(&page.id).map(|old_id| {
                PageId::from(
                    self.id_generator
                        .deterministic(environment_id, &[new_api_id.as_str(), old_id.as_str()]),
                )
            })
        });

        remap_general_conditions(&mut bundle.plans, &page_ids);
        remap_plans(&mut bundle.plans, |plan| {
            non_blank(&plan.id).map(|old_id| {
                PlanId::from(
                    self.id_generator
                        .deterministic(environment_id, &[new_api_id.as_str(), old_id.as_str()]),
                )
            })
        });
    }

    fn generate_empty_ids(&self, bundle: &mut ImportBundle) {
        for page in bundle.pages.iter_mut().filter(|page| non_blank(&page.id).is_none()) {
            page.id = Some(PageId::from(self.id_generator.random()));
        }
        for plan in bundle.plans.iter_mut().filter(|plan| non_blank(&plan.id).is_none()) {
            plan.id = Some(PlanId::from(self.id_generator.random()));
        }
    }
}

/// Assign new page ids, then repoint children at their parent's new id.
///
/// Returns the `old id -> new id` table. Pages for which `new_id_for` yields
/// nothing keep their id. When several pages share an old id, the first one
/// wins.
fn remap_pages<F>(pages: &mut [PageDescriptor], mut new_id_for: F) -> HashMap<PageId, PageId>
where
    F: FnMut(&PageDescriptor) -> Option<PageId>,
{
    let mut page_ids = HashMap::new();

    for page in pages.iter_mut() {
        let Some(new_id) = new_id_for(&*page) else {
            continue;
        };
        let old_id = page.id.replace(new_id.clone());
        debug!(old_page_id = ?old_id, new_page_id = %new_id, "Page id recalculated");
        if let Some(old_id) = old_id.filter(|id| !id.is_blank()) {
            page_ids.entry(old_id).or_insert(new_id);
        }
    }

    for page in pages.iter_mut() {
        if let Some(new_parent) = page.parent_id.as_ref().and_then(|parent| page_ids.get(parent)) {
            page.parent_id = Some(new_parent.clone());
        }
    }

    page_ids
}

fn remap_general_conditions(plans: &mut [PlanDescriptor], page_ids: &HashMap<PageId, PageId>) {
    for plan in plans.iter_mut() {
        let new_page = plan.general_conditions.as_ref().and_then(|page| page_ids.get(page));
        if let Some(new_page) = new_page {
            plan.general_conditions = Some(new_page.clone());
        }
    }
}

fn remap_plans<F>(plans: &mut [PlanDescriptor], mut new_id_for: F)
where
    F: FnMut(&PlanDescriptor) -> Option<PlanId>,
{
    for plan in plans.iter_mut() {
        if let Some(new_id) = new_id_for(&*plan) {
            debug!(old_plan_id = ?plan.id, new_plan_id = %new_id, "Plan id recalculated");
            plan.id = Some(new_id);
        }
    }
}
