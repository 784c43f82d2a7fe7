//! API Handlers
//!
//! HTTP request handlers for each facade endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::MemoryBackend;
use crate::error::Result;
use crate::facade::CacheFacade;
use crate::models::{
    AddRequest, AddResponse, DeleteResponse, GetResponse, HealthResponse, ListResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The indexed facade all handlers call into
    pub facade: CacheFacade<MemoryBackend>,
    /// The backend itself, shared with the expiry sweep task
    pub backend: Arc<MemoryBackend>,
}

impl AppState {
    /// Creates a new AppState over the given backend.
    pub fn new(backend: MemoryBackend) -> Self {
        let backend = Arc::new(backend);
        Self {
            facade: CacheFacade::new(Arc::clone(&backend)),
            backend,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(MemoryBackend::new(config.max_entries, config.default_ttl))
    }
}

/// Handler for POST /add
///
/// Stores a key-value pair and records the key in the index.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    let (key, value) = state.facade.add(&req.key, req.value.into_bytes()).await?;

    Ok(Json(AddResponse::new(key, &value)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value by key. A miss is a 200 with `found: false`, not an
/// error status.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.facade.get(&key).await?;

    Ok(Json(GetResponse::new(key, value.as_deref())))
}

/// Handler for DELETE /del/:key
///
/// Drops the key from the index and best-effort removes its entry.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let deleted = state.facade.delete(&key).await?;

    Ok(Json(DeleteResponse::new(deleted)))
}

/// Handler for GET /list
///
/// Enumerates every indexed key with its current value.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<ListResponse>> {
    let entries = state.facade.list().await?;

    Ok(Json(ListResponse::new(&entries)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(MemoryBackend::new(100, 0))
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = test_state();

        let req = AddRequest {
            key: "test_key".to_string(),
            value: "test_value".to_string(),
        };
        let result = add_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        let response = get_handler(State(state), Path("test_key".to_string()))
            .await
            .unwrap();
        assert!(response.found);
        assert_eq!(response.value.as_deref(), Some("test_value"));
    }

    #[tokio::test]
    async fn test_get_miss_is_ok_not_error() {
        let state = test_state();

        let response = get_handler(State(state), Path("nonexistent".to_string()))
            .await
            .unwrap();
        assert!(!response.found);
        assert!(response.value.is_none());
    }

    #[tokio::test]
    async fn test_delete_handler_removes_from_list() {
        let state = test_state();

        let req = AddRequest {
            key: "to_delete".to_string(),
            value: "value".to_string(),
        };
        add_handler(State(state.clone()), Json(req)).await.unwrap();

        let result = delete_handler(State(state.clone()), Path("to_delete".to_string())).await;
        assert!(result.is_ok());

        let listed = list_handler(State(state)).await.unwrap();
        assert_eq!(listed.count, 0);
    }

    #[tokio::test]
    async fn test_list_handler_reports_entries() {
        let state = test_state();

        for (key, value) in [("a", "1"), ("b", "2")] {
            let req = AddRequest {
                key: key.to_string(),
                value: value.to_string(),
            };
            add_handler(State(state.clone()), Json(req)).await.unwrap();
        }

        let listed = list_handler(State(state)).await.unwrap();
        assert_eq!(listed.count, 2);
        assert_eq!(listed.entries.get("a"), Some(&"1".to_string()));
    }

    #[tokio::test]
    async fn test_add_empty_key_rejected() {
        let state = test_state();

        let req = AddRequest {
            key: "".to_string(),
            value: "value".to_string(),
        };
        let result = add_handler(State(state), Json(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
