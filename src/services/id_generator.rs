//! Identifier generation strategies
//!
//! Two strategies sit behind one trait: random identifiers for entities with
//! no stable anchor, and deterministic identifiers derived from the
//! environment and the ids found in an imported definition. Re-importing the
//! same definition into the same environment therefore yields the same ids.

use crate::config::IdentityConfig;
use crate::domain::EnvironmentId;
use crate::errors::{ApimError, Result};
use uuid::Uuid;

/// Namespace used for deterministic ids unless configured otherwise.
pub const DEFAULT_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2d3e_8a4b_4c5d_9e7f_0a1b_2c3d_4e5f);

/// Produces identifiers for imported entities.
pub trait IdGenerator: Send + Sync {
    /// A fresh unique identifier
    fn random(&self) -> String;

    /// An identifier that only depends on the environment and `parts`
    fn deterministic(&self, environment_id: &EnvironmentId, parts: &[&str]) -> String;
}

/// UUID based generator: v4 for random ids, v5 for deterministic ones.
#[derive(Debug, Clone, Copy)]
pub struct UuidIdGenerator {
    namespace: Uuid,
}

impl UuidIdGenerator {
    pub fn new(namespace: Uuid) -> Self {
        Self { namespace }
    }

    /// Build a generator from the configured namespace
    pub fn from_config(config: &IdentityConfig) -> Result<Self> {
        let namespace = Uuid::parse_str(&config.namespace).map_err(|e| {
            ApimError::validation_field(
                format!("Invalid identity namespace '{}': {}", config.namespace, e),
                "identity.namespace",
            )
        })?;
        Ok(Self::new(namespace))
    }

    pub fn namespace(&self) -> Uuid {
        self.namespace
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_NAMESPACE)
    }
}

impl IdGenerator for UuidIdGenerator {
    fn random(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn deterministic(&self, environment_id: &EnvironmentId, parts: &[&str]) -> String {
        // Length prefixes keep ("ab", "c") and ("a", "bc") apart.
        let mut name = Vec::new();
        for part in std::iter::once(environment_id.as_str()).chain(parts.iter().copied()) {
            name.extend_from_slice(&(part.len() as u64).to_be_bytes());
            name.extend_from_slice(part.as_bytes());
        }
        Uuid::new_v5(&self.namespace, &name).to_string()
    }
}
