//! Domain ID Types with NewType Pattern
//!
//! Type-safe wrappers for API, page, plan and environment identifiers so they
//! cannot be mixed up while an import bundle is being remapped. Identifiers are
//! opaque strings: imported definitions may carry any value, including an
//! empty one, which the services treat the same as an absent id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate NewType ID wrappers with all required traits
macro_rules! domain_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Create an ID from an existing string
            pub fn from_string(s: String) -> Self {
                Self(s)
            }

            /// Create an ID from a string slice
            pub fn from_str_unchecked(s: &str) -> Self {
                Self(s.to_string())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert to inner string value
            pub fn into_string(self) -> String {
                self.0
            }

            /// True when the ID holds no characters
            pub fn is_blank(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

domain_id!(
    /// Unique identifier for an API
    ApiId
);

domain_id!(
    /// Unique identifier for a documentation page
    PageId
);

domain_id!(
    /// Unique identifier for a plan
    PlanId
);

domain_id!(
    /// Identifier of the environment an API lives in
    EnvironmentId
);

domain_id!(
    /// Stable logical identifier that survives promotion across environments
    CrossId
);

domain_id!(
    /// Unique identifier for a workflow record
    WorkflowId
);

/// Returns the id only when it is present and not blank.
pub fn non_blank<T: AsRef<str>>(id: &Option<T>) -> Option<&T> {
    id.as_ref().filter(|value| !value.as_ref().is_empty())
}
