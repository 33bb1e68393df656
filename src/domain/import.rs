//! Import bundle
//!
//! The transient aggregate read from an exported definition or a CRD before it
//! is persisted. Identifier recalculation rewrites the ids of this bundle in
//! place.

use crate::domain::api::ApiDescriptor;
use crate::domain::id::non_blank;
use crate::domain::page::PageDescriptor;
use crate::domain::plan::PlanDescriptor;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// API definition bundle: one API with its pages and plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiDescriptor>,

    #[serde(default)]
    pub pages: Vec<PageDescriptor>,

    #[serde(default)]
    pub plans: Vec<PlanDescriptor>,
}

impl ImportBundle {
    pub fn new(api: ApiDescriptor) -> Self {
        Self { api: Some(api), pages: Vec::new(), plans: Vec::new() }
    }

    pub fn with_pages(mut self, pages: Vec<PageDescriptor>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_plans(mut self, plans: Vec<PlanDescriptor>) -> Self {
        self.plans = plans;
        self
    }

    /// Decode a bundle from its JSON export form
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode a bundle from a YAML document (CRD spec form)
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// True when every page and plan carries a non-blank id.
    pub fn is_fully_identified(&self) -> bool {
        self.pages.iter().all(|page| non_blank(&page.id).is_some())
            && self.plans.iter().all(|plan| non_blank(&plan.id).is_some())
    }
}
