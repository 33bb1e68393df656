//! Review workflow domain types
//!
//! Workflows are read-only here: the lifecycle service only needs to know
//! whether the latest review of an API is still in progress.

use crate::domain::id::{ApiId, WorkflowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of workflow attached to an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowType {
    Review,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Review => "REVIEW",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of a review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowState {
    Draft,
    InReview,
    RequestForChanges,
    ReviewOk,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Draft => "DRAFT",
            WorkflowState::InReview => "IN_REVIEW",
            WorkflowState::RequestForChanges => "REQUEST_FOR_CHANGES",
            WorkflowState::ReviewOk => "REVIEW_OK",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A workflow record attached to an API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: WorkflowId,
    /// API the workflow belongs to
    pub reference_id: ApiId,
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    pub state: WorkflowState,
    pub created_at: DateTime<Utc>,
}

impl Workflow {
    /// Create a review workflow for an API
    pub fn review(reference_id: ApiId, state: WorkflowState) -> Self {
        Self {
            id: WorkflowId::new(),
            reference_id,
            workflow_type: WorkflowType::Review,
            state,
            created_at: Utc::now(),
        }
    }

    pub fn is_in_review(&self) -> bool {
        self.state == WorkflowState::InReview
    }
}
