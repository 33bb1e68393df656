//! # Error Handling
//!
//! Error types for the API identity and lifecycle core, built with `thiserror`.
//! Collaborator failures surface as [`ApimError::Repository`] and are
//! propagated untouched by the services.

/// Custom result type for core operations
pub type Result<T> = std::result::Result<T, ApimError>;

/// Main error type for the API management core
#[derive(thiserror::Error, Debug)]
pub enum ApimError {
    /// The import bundle carries no API descriptor
    #[error("Api is mandatory")]
    MissingApi,

    /// A lifecycle state change was rejected
    #[error("Lifecycle state '{state}' is not allowed")]
    InvalidLifecycleState { state: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Lookup collaborator failures
    #[error("Repository error: {message}")]
    Repository {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {context}")]
    Serialization {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApimError {
    /// Create a lifecycle rejection for the requested state
    pub fn invalid_lifecycle_state<S: Into<String>>(state: S) -> Self {
        Self::InvalidLifecycleState { state: state.into() }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()) }
    }

    /// Create a repository error
    pub fn repository<S: Into<String>>(message: S) -> Self {
        Self::Repository { message: message.into(), source: None }
    }

    /// HTTP status code a caller should map this error to
    pub fn status_code(&self) -> u16 {
        match self {
            ApimError::MissingApi => 400,
            ApimError::InvalidLifecycleState { .. } => 400,
            ApimError::Validation { .. } => 400,
            ApimError::Serialization { .. } => 400,
            ApimError::Repository { .. } => 500,
            ApimError::Config { .. } => 500,
        }
    }

    /// Check if this error should be retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApimError::Repository { .. })
    }
}

impl From<serde_json::Error> for ApimError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            context: "JSON deserialization failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<serde_yaml::Error> for ApimError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Serialization {
            context: "YAML deserialization failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<config::ConfigError> for ApimError {
    fn from(error: config::ConfigError) -> Self {
        Self::Config {
            message: "Configuration loading failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl From<validator::ValidationErrors> for ApimError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(format!("Validation failed: {}", message))
    }
}
