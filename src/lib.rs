//! Keydex - An indexed facade over an ephemeral key-value cache
//!
//! The underlying cache only supports get/set/delete by exact key; keydex
//! adds key enumeration by maintaining a secondary index under a reserved
//! sentinel key and keeping it consistent with the live entries.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod facade;
pub mod index;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use facade::CacheFacade;
pub use tasks::spawn_sweep_task;
