//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding cache, serialization, and input validation failures.
///
/// Rate-limit rejections are deliberately *not* part of this enum; they are
/// a control decision, not a data failure, and live in
/// [`crate::rate_limit::RateLimitExceeded`].
#[derive(Debug, thiserror::Error)]
pub enum FootballDataError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] footballdata_api::Error),
    /// A cache operation failed (e.g. deserialization of cached data).
    #[error("Cache error: {0}")]
    Cache(String),
    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
