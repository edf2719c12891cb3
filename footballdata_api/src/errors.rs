//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unparseable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API key was rejected (HTTP 401/403).
    #[error("Invalid API key")]
    InvalidApiKey,
    /// The requested resource does not exist (HTTP 404 or empty response).
    #[error("Resource not found")]
    NotFound,
    /// The upstream API rate limit was hit (HTTP 429). Carries the
    /// `Retry-After` header value when the API provided one.
    #[error("Rate limited by upstream API")]
    RateLimited { retry_after_secs: Option<u64> },
}
