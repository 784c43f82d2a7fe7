//! API Module
//!
//! HTTP handlers and routing for the facade. Presentation glue only: every
//! handler turns request strings into facade arguments and renders whatever
//! the facade returns.
//!
//! # Endpoints
//! - `POST /add` - Store a key-value pair and index the key
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /del/:key` - Delete a key
//! - `GET /list` - Enumerate all indexed entries
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
