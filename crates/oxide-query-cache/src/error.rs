//! Error types for cache profiles.

/// Errors raised by [`QueryCacheProfile`](crate::QueryCacheProfile).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The key was requested before one was configured.
    #[error("No cache key was set on the query cache profile")]
    NoCacheKey,

    /// Parameters or connection settings could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
