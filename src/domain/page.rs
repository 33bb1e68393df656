//! Documentation page descriptor

use crate::domain::id::{CrossId, PageId};
use serde::{Deserialize, Serialize};

/// A documentation page of an imported API.
///
/// `parent_id` refers to another page of the same bundle, forming the
/// documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PageId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_id: Option<CrossId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<PageId>,

    #[serde(default)]
    pub name: String,
}

impl PageDescriptor {
    pub fn new(id: Option<&str>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.map(PageId::from),
            cross_id: None,
            parent_id: parent_id.map(PageId::from),
            name: String::new(),
        }
    }

    pub fn with_cross_id(mut self, cross_id: &str) -> Self {
        self.cross_id = Some(CrossId::from(cross_id));
        self
    }
}
