//! Request and Response models for the facade's HTTP API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. The HTTP
//! layer is presentation glue only; all cache semantics live in the facade.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::AddRequest;
pub use responses::{
    AddResponse, DeleteResponse, ErrorResponse, GetResponse, HealthResponse, ListResponse,
};
