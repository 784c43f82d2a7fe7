//! Request DTOs for the facade's HTTP API
//!
//! Defines the structure of incoming HTTP request bodies. Key validation
//! is the facade's job; the DTO only carries the raw strings through.

use serde::Deserialize;

/// Request body for the ADD operation (POST /add)
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_deserialize() {
        let json = r#"{"key": "color", "value": "blue"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "color");
        assert_eq!(req.value, "blue");
    }

    #[test]
    fn test_add_request_empty_value_allowed() {
        let json = r#"{"key": "color", "value": ""}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, "");
    }
}
