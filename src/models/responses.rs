//! Response DTOs for the facade's HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies. Values are
//! rendered as UTF-8 text (lossily where needed); the facade itself deals
//! in raw bytes.

use std::collections::BTreeMap;

use serde::Serialize;

/// Renders facade bytes for a JSON body.
fn render_value(value: &[u8]) -> String {
    String::from_utf8_lossy(value).into_owned()
}

/// Response body for the ADD operation (POST /add)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The key that was added
    pub key: String,
    /// The value that was stored
    pub value: String,
}

impl AddResponse {
    /// Creates a new AddResponse from the stored pair
    pub fn new(key: impl Into<String>, value: &[u8]) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' added successfully", key),
            key,
            value: render_value(value),
        }
    }
}

/// Response body for the GET operation (GET /get/:key)
///
/// A miss is a normal outcome: `found` is false and `value` is null.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value, or null on a miss
    pub value: Option<String>,
    /// Whether the key was present in the underlying cache
    pub found: bool,
}

impl GetResponse {
    /// Creates a new GetResponse from a lookup outcome
    pub fn new(key: impl Into<String>, value: Option<&[u8]>) -> Self {
        Self {
            key: key.into(),
            found: value.is_some(),
            value: value.map(render_value),
        }
    }
}

/// Response body for the DELETE operation (DELETE /del/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the LIST operation (GET /list)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Number of listed entries
    pub count: usize,
    /// Every indexed key with its current value
    pub entries: BTreeMap<String, String>,
}

impl ListResponse {
    /// Creates a new ListResponse from the facade's listing
    pub fn new(entries: &BTreeMap<String, Vec<u8>>) -> Self {
        let entries: BTreeMap<String, String> = entries
            .iter()
            .map(|(key, value)| (key.clone(), render_value(value)))
            .collect();
        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
