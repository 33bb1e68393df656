//! API lifecycle validation service
//!
//! Decides whether an update may change the `apiLifecycleState` of an API and
//! returns the state to persist. The transition table lives in
//! [`crate::domain::lifecycle`]; this service adds the review workflow gate
//! that needs a lookup.

use crate::domain::{
    transition_rule, validate_federated_transition, ApiId, ApiLifecycleState, OriginContext,
    PlanDescriptor, PlanId, PlanStatus, TransitionRule, Workflow, WorkflowType,
};
use crate::errors::{ApimError, Result};
use crate::storage::repositories::WorkflowQueryRepository;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Validates lifecycle state changes of APIs.
#[derive(Clone)]
pub struct ApiLifecycleService {
    workflow_query: Arc<dyn WorkflowQueryRepository>,
}

impl ApiLifecycleService {
    pub fn new(workflow_query: Arc<dyn WorkflowQueryRepository>) -> Self {
        Self { workflow_query }
    }

    /// Validate a requested state change and return the state to persist.
    ///
    /// `requested == None` means the update does not touch the lifecycle.
    /// Leaving `CREATED` is refused while the latest review workflow of the API
    /// is `IN_REVIEW`.
    #[instrument(skip(self), fields(api_id = %api_id), name = "validate_api_lifecycle")]
    pub async fn validate_and_sanitize(
        &self,
        api_id: &ApiId,
        current: ApiLifecycleState,
        requested: Option<ApiLifecycleState>,
    ) -> Result<ApiLifecycleState> {
        let Some(requested) = requested else {
            return Ok(current);
        };

        match transition_rule(current, requested) {
            TransitionRule::Unchanged => Ok(current),
            TransitionRule::Allowed => Ok(requested),
            TransitionRule::Rejected => {
                warn!(%current, %requested, "Lifecycle transition rejected");
                Err(ApimError::invalid_lifecycle_state(requested.as_str()))
            }
            TransitionRule::RequiresNoPendingReview => {
                let workflows = self
                    .workflow_query
                    .find_by_reference_and_type(api_id, WorkflowType::Review)
                    .await?;

                if workflows.first().is_some_and(Workflow::is_in_review) {
                    warn!(%requested, "Lifecycle transition blocked by pending review");
                    return Err(ApimError::invalid_lifecycle_state(requested.as_str()));
                }

                debug!(%current, %requested, "Lifecycle transition accepted");
                Ok(requested)
            }
        }
    }

    /// Pick the rule set matching where the API comes from.
    pub async fn validate_for_origin(
        &self,
        origin: OriginContext,
        api_id: &ApiId,
        current: ApiLifecycleState,
        requested: Option<ApiLifecycleState>,
    ) -> Result<ApiLifecycleState> {
        if origin.is_federated() {
            validate_federated_transition(current, requested)
        } else {
            self.validate_and_sanitize(api_id, current, requested).await
        }
    }
}

/// Deprecate every published or staging plan once the API is deprecated.
///
/// Returns the ids of the plans that changed; nothing happens for any other
/// state.
pub fn deprecate_active_plans(
    state: ApiLifecycleState,
    plans: &mut [PlanDescriptor],
) -> Vec<PlanId> {
    if state != ApiLifecycleState::Deprecated {
        return Vec::new();
    }

    plans
        .iter_mut()
        .filter(|plan| plan.status.is_active())
        .filter_map(|plan| {
            plan.status = PlanStatus::Deprecated;
            plan.id.clone()
        })
        .collect()
}
