use serde::{Deserialize, Serialize};

/// Envelope for list endpoints: a result count plus the payload array.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub results: i64,
    pub response: Vec<T>,
}

/// Envelope for single-resource endpoints.
#[derive(Serialize, Deserialize)]
pub struct ApiItem<T> {
    pub response: T,
}
