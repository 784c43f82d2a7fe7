//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.
//!
//! A cache miss is deliberately not represented here: an absent key is a
//! normal outcome surfaced as `Option::None`, not a failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend::BackendError;

// == Cache Error Enum ==
/// Unified error type for the cache facade.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Caller supplied an empty, oversized, or reserved key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The underlying cache could not be reached or misbehaved
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<BackendError> for CacheError {
    fn from(err: BackendError) -> Self {
        CacheError::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        // A corrupt index entry is indistinguishable from a broken store;
        // never silently substitute an empty index for it.
        CacheError::StoreUnavailable(format!("index serialization: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::InvalidKey(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            CacheError::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
