//! API lifecycle state domain types
//!
//! The lifecycle state is what API consumers see in the portal. It starts at
//! `CREATED` and only moves through the transitions encoded here:
//!
//! ```text
//! CREATED ──(no pending review)──> PUBLISHED / UNPUBLISHED / DEPRECATED / ARCHIVED
//! PUBLISHED <──> UNPUBLISHED ──> DEPRECATED / ARCHIVED
//! DEPRECATED, ARCHIVED: absorbing
//! ```

use crate::errors::{ApimError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal-facing lifecycle state of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiLifecycleState {
    #[default]
    Created,
    Published,
    Unpublished,
    Deprecated,
    Archived,
}

impl ApiLifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiLifecycleState::Created => "CREATED",
            ApiLifecycleState::Published => "PUBLISHED",
            ApiLifecycleState::Unpublished => "UNPUBLISHED",
            ApiLifecycleState::Deprecated => "DEPRECATED",
            ApiLifecycleState::Archived => "ARCHIVED",
        }
    }

    /// States with no outgoing transition at all.
    pub fn is_absorbing(&self) -> bool {
        matches!(self, ApiLifecycleState::Deprecated | ApiLifecycleState::Archived)
    }
}

impl fmt::Display for ApiLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiLifecycleState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(ApiLifecycleState::Created),
            "PUBLISHED" => Ok(ApiLifecycleState::Published),
            "UNPUBLISHED" => Ok(ApiLifecycleState::Unpublished),
            "DEPRECATED" => Ok(ApiLifecycleState::Deprecated),
            "ARCHIVED" => Ok(ApiLifecycleState::Archived),
            _ => Err(format!("Invalid API lifecycle state: {}", s)),
        }
    }
}

/// Verdict of the generic transition table for a requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRule {
    /// Requested state equals the current one; nothing to persist.
    Unchanged,
    /// The requested state may be persisted as is.
    Allowed,
    /// Allowed only when the API has no review in progress.
    RequiresNoPendingReview,
    /// The transition is illegal.
    Rejected,
}

/// Generic (native API) transition table.
///
/// `DEPRECATED -> DEPRECATED` is rejected rather than treated as a no-op.
pub fn transition_rule(current: ApiLifecycleState, requested: ApiLifecycleState) -> TransitionRule {
    use ApiLifecycleState::*;

    if current != Deprecated && current == requested {
        return TransitionRule::Unchanged;
    }

    match (current, requested) {
        (Deprecated, _) | (Archived, _) => TransitionRule::Rejected,
        (Published, Created) | (Unpublished, Created) => TransitionRule::Rejected,
        (Published, _) | (Unpublished, _) => TransitionRule::Allowed,
        (Created, _) => TransitionRule::RequiresNoPendingReview,
    }
}

/// Lifecycle validation for federated APIs.
///
/// Federated APIs have no review workflow, so the whole decision is local.
/// Unlike the generic table, `PUBLISHED -> CREATED` is accepted here.
pub fn validate_federated_transition(
    current: ApiLifecycleState,
    requested: Option<ApiLifecycleState>,
) -> Result<ApiLifecycleState> {
    let Some(requested) = requested else {
        return Ok(current);
    };

    if current.is_absorbing() {
        return Err(ApimError::invalid_lifecycle_state(requested.as_str()));
    }

    if current == requested {
        return Ok(current);
    }

    if current == ApiLifecycleState::Unpublished && requested == ApiLifecycleState::Created {
        return Err(ApimError::invalid_lifecycle_state(requested.as_str()));
    }

    Ok(requested)
}
