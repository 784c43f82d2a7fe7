//! Backend Module
//!
//! The contract with the underlying distributed cache.
//!
//! The facade never talks to storage directly; everything goes through the
//! [`CacheBackend`] trait. A miss is `Ok(None)` / `Ok(false)`, never an
//! error: only genuine transport or storage failures become [`BackendError`].

mod memory;

#[cfg(test)]
pub mod mock;

pub use memory::MemoryBackend;

use thiserror::Error;

// == Backend Error ==
/// Failure of an underlying-cache call for a reason other than a miss
/// (timeout, connection error, storage fault).
#[derive(Error, Debug)]
pub enum BackendError {
    /// The cache could not be reached or refused the operation
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
}

// == Cache Backend Trait ==
/// Minimal get/set/delete surface of the underlying cache.
///
/// No enumeration primitive and no compare-and-swap are assumed; those
/// constraints shape the whole index protocol built on top.
#[allow(async_fn_in_trait)]
pub trait CacheBackend {
    /// Fetches a value by exact key. `Ok(None)` means the key is absent
    /// (a miss), which is a normal outcome for an ephemeral cache.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Stores a value under a key, overwriting any prior value.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), BackendError>;

    /// Removes a key. `Ok(false)` means the key was already absent.
    async fn delete(&self, key: &str) -> Result<bool, BackendError>;
}
