//! Index Store Module
//!
//! The underlying cache has no "list all keys" primitive, so the facade
//! keeps its own index: one well-known entry whose value is the serialized
//! set of every user key currently considered live. This module owns that
//! single entry and nothing else.
//!
//! The sentinel key lives in a reserved namespace so it can never collide
//! with a caller-supplied key; the facade rejects user keys carrying the
//! prefix before any I/O happens.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::backend::CacheBackend;
use crate::error::Result;

// == Reserved Namespace ==
/// Prefix reserved for facade-internal entries. User keys must not start
/// with this.
pub const RESERVED_PREFIX: &str = "__keydex:";

/// The sentinel key under which the index is stored.
pub const INDEX_KEY: &str = "__keydex:index";

// == Index Store ==
/// Reader/writer for the single index entry.
///
/// Writes are plain overwrites; the underlying cache offers no
/// compare-and-swap, so concurrent writers can lose updates (see the
/// facade's documentation of the race).
#[derive(Debug)]
pub struct IndexStore<B> {
    backend: Arc<B>,
}

impl<B> Clone for IndexStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: CacheBackend> IndexStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    // == Read ==
    /// Fetches the current key set.
    ///
    /// A miss on the sentinel entry means the index was never written or
    /// has been evicted; both read as the empty set. Any other failure,
    /// including a corrupt payload, propagates as `StoreUnavailable` so a
    /// caller never mistakes a broken store for an empty one.
    pub async fn read(&self) -> Result<BTreeSet<String>> {
        match self.backend.get(INDEX_KEY).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(BTreeSet::new()),
        }
    }

    // == Write ==
    /// Serializes and overwrites the index entry with the given key set.
    pub async fn write(&self, keys: &BTreeSet<String>) -> Result<()> {
        let bytes = serde_json::to_vec(keys)?;
        self.backend.set(INDEX_KEY, bytes).await?;
        Ok(())
    }
}
