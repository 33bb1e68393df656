//! Plan descriptor and plan status

use crate::domain::id::{CrossId, PageId, PlanId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Publication status of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    #[default]
    Staging,
    Published,
    Deprecated,
    Closed,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Staging => "STAGING",
            PlanStatus::Published => "PUBLISHED",
            PlanStatus::Deprecated => "DEPRECATED",
            PlanStatus::Closed => "CLOSED",
        }
    }

    /// Plans still open to subscriptions
    pub fn is_active(&self) -> bool {
        matches!(self, PlanStatus::Staging | PlanStatus::Published)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plan of an imported API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlanId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_id: Option<CrossId>,

    #[serde(default)]
    pub name: String,

    /// Page holding the general conditions subscribers must accept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_conditions: Option<PageId>,

    #[serde(default)]
    pub status: PlanStatus,

    /// Flow definitions, carried through untouched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flows: Vec<Value>,
}

impl PlanDescriptor {
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.map(PlanId::from), ..Default::default() }
    }

    pub fn with_cross_id(mut self, cross_id: &str) -> Self {
        self.cross_id = Some(CrossId::from(cross_id));
        self
    }

    pub fn with_general_conditions(mut self, page_id: &str) -> Self {
        self.general_conditions = Some(PageId::from(page_id));
        self
    }

    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }
}
