//! Error types for DDL generation.

/// Errors that can occur while generating SQL for a platform.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// The input is malformed or empty (table without columns, unknown
    /// referential action, inconsistent diff, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A type alias or type kind name is not known to the registry.
    #[error("Unknown column type '{name}'")]
    UnknownType {
        /// The alias or kind name that was looked up.
        name: String,
    },

    /// The platform cannot express the requested operation.
    #[error("Operation '{operation}' is not supported by platform '{platform}'")]
    UnsupportedOperation {
        /// Description of the operation, including the offending value.
        operation: String,
        /// Name of the platform that rejected it.
        platform: &'static str,
    },

    /// Failed to read a schema or diff description.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DdlError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    pub(crate) fn unsupported(operation: impl Into<String>, platform: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
            platform,
        }
    }
}

/// Result type for DDL generation.
pub type Result<T> = std::result::Result<T, DdlError>;
