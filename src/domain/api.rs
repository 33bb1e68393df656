//! API descriptor domain types

use crate::domain::id::{ApiId, CrossId};
use crate::domain::lifecycle::ApiLifecycleState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who owns the definition of an API.
///
/// `Kubernetes` APIs are managed by an external operator that is the source
/// of truth for their identifiers; `Integration` APIs are federated from a
/// third-party gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OriginContext {
    #[default]
    #[serde(alias = "management")]
    Management,
    #[serde(alias = "kubernetes")]
    Kubernetes,
    #[serde(alias = "integration")]
    Integration,
}

impl OriginContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginContext::Management => "MANAGEMENT",
            OriginContext::Kubernetes => "KUBERNETES",
            OriginContext::Integration => "INTEGRATION",
        }
    }

    /// Whether the platform may rewrite identifiers of APIs from this origin.
    pub fn can_recalculate_ids(&self) -> bool {
        !matches!(self, OriginContext::Kubernetes)
    }

    /// Federated APIs follow their own lifecycle rules.
    pub fn is_federated(&self) -> bool {
        matches!(self, OriginContext::Integration)
    }
}

impl fmt::Display for OriginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OriginContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MANAGEMENT" => Ok(OriginContext::Management),
            "KUBERNETES" => Ok(OriginContext::Kubernetes),
            "INTEGRATION" => Ok(OriginContext::Integration),
            _ => Err(format!("Invalid origin context: {}", s)),
        }
    }
}

/// The API part of an imported definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ApiId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_id: Option<CrossId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub origin: OriginContext,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ApiLifecycleState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_kubernetes_blocks_recalculation() {
        assert!(OriginContext::Management.can_recalculate_ids());
        assert!(OriginContext::Integration.can_recalculate_ids());
        assert!(!OriginContext::Kubernetes.can_recalculate_ids());
    }

    #[test]
    fn origin_parsing_is_case_insensitive() {
        assert_eq!("kubernetes".parse::<OriginContext>(), Ok(OriginContext::Kubernetes));
        assert_eq!("MANAGEMENT".parse::<OriginContext>(), Ok(OriginContext::Management));
        assert!("operator".parse::<OriginContext>().is_err());
    }

    #[test]
    fn api_descriptor_defaults() {
        let api: ApiDescriptor = serde_json::from_str(r#"{"name":"petstore"}"#).unwrap();
        assert_eq!(api.id, None);
        assert_eq!(api.origin, OriginContext::Management);
        assert_eq!(api.lifecycle_state, None);
    }

    #[test]
    fn api_descriptor_accepts_lowercase_origin() {
        let api: ApiDescriptor =
            serde_json::from_str(r#"{"id":"a","crossId":"x","origin":"kubernetes"}"#).unwrap();
        assert_eq!(api.origin, OriginContext::Kubernetes);
        assert_eq!(api.cross_id, Some(CrossId::from("x")));
    }
}
