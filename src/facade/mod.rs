//! Cache Facade Module
//!
//! The four public operations (`add`, `get`, `delete`, `list`) over the
//! underlying cache, plus the index maintenance that keeps enumeration
//! working against a store that has no enumeration primitive.
//!
//! # The index race
//!
//! `add` and `delete` update the index by read-modify-write over a single
//! shared entry, and the underlying cache offers no compare-and-swap. Two
//! concurrent `add` calls for different new keys can both read the same
//! prior index, each insert their own key locally, and the later writer
//! overwrites the earlier one's update. The earlier key's entry survives,
//! but it drops out of `list` until it is added again. This is an accepted
//! limitation of the single-record index; a store with a versioned-write
//! primitive would eliminate it (see DESIGN.md).


use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::CacheBackend;
use crate::error::{CacheError, Result};
use crate::index::{IndexStore, RESERVED_PREFIX};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

// == Cache Facade ==
/// Indexed view over an underlying cache backend.
///
/// The facade is the sole writer of the index entry; user entries belong to
/// whichever caller last wrote them.
#[derive(Debug)]
pub struct CacheFacade<B> {
    backend: Arc<B>,
    index: IndexStore<B>,
}

impl<B> Clone for CacheFacade<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            index: self.index.clone(),
        }
    }
}

impl<B: CacheBackend> CacheFacade<B> {
    // == Constructor ==
    pub fn new(backend: Arc<B>) -> Self {
        let index = IndexStore::new(Arc::clone(&backend));
        Self { backend, index }
    }

    // == Key Validation ==
    /// Rejects malformed keys before any I/O: empty, oversized, or inside
    /// the reserved namespace (which would collide with the index entry).
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if key.starts_with(RESERVED_PREFIX) {
            return Err(CacheError::InvalidKey(format!(
                "prefix '{}' is reserved",
                RESERVED_PREFIX
            )));
        }
        Ok(())
    }

    // == Add ==
    /// Stores a key-value pair and records the key in the index.
    ///
    /// The index is only written when the key is new, so overwriting an
    /// existing key costs a single backend write. The index write happens
    /// before the entry write; if the entry write then fails, the prior
    /// index contents are restored best-effort and the whole operation
    /// reports `StoreUnavailable` rather than leaving a half-applied add.
    ///
    /// Returns the stored pair for confirmation.
    pub async fn add(&self, key: &str, value: Vec<u8>) -> Result<(String, Vec<u8>)> {
        Self::validate_key(key)?;

        let current = self.index.read().await?;
        let prior = if current.contains(key) {
            None
        } else {
            let mut updated = current.clone();
            updated.insert(key.to_string());
            self.index.write(&updated).await?;
            Some(current)
        };

        if let Err(err) = self.backend.set(key, value.clone()).await {
            if let Some(prior) = prior {
                // Compensate: put the index back the way we found it. If
                // even that fails the store is down anyway and the caller
                // is about to hear about it.
                if let Err(rollback_err) = self.index.write(&prior).await {
                    warn!(%key, error = %rollback_err, "index rollback failed after entry write failure");
                }
            }
            return Err(err.into());
        }

        debug!(%key, "entry stored");
        Ok((key.to_string(), value))
    }

    // == Get ==
    /// Reads an entry directly by key. The index is not consulted; exact
    /// lookup needs no enumeration.
    ///
    /// `None` means the key is absent from the underlying cache, a normal
    /// outcome rather than an error.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Self::validate_key(key)?;
        Ok(self.backend.get(key).await?)
    }

    // == Delete ==
    /// Removes a key from the index, then opportunistically removes its
    /// entry from the underlying cache to free capacity.
    ///
    /// `list` is driven by the index alone, so the entry removal is
    /// best-effort: a miss or a failure there is logged and absorbed.
    /// Deleting a key that is not in the index is a no-op.
    ///
    /// Returns the deleted key for confirmation.
    pub async fn delete(&self, key: &str) -> Result<String> {
        Self::validate_key(key)?;

        let mut keys = self.index.read().await?;
        if keys.remove(key) {
            self.index.write(&keys).await?;

            match self.backend.delete(key).await {
                Ok(true) => debug!(%key, "entry removed"),
                Ok(false) => debug!(%key, "entry already gone"),
                Err(err) => warn!(%key, error = %err, "best-effort entry removal failed"),
            }
        }

        Ok(key.to_string())
    }

    // == List ==
    /// Returns every indexed key with its current value.
    ///
    /// Keys whose entry the underlying cache has evicted are silently
    /// omitted (eviction tolerance); a genuine backend failure still
    /// propagates.
    pub async fn list(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        let keys = self.index.read().await?;

        let mut entries = BTreeMap::new();
        for key in keys {
            if let Some(value) = self.backend.get(&key).await? {
                entries.insert(key, value);
            }
        }
        Ok(entries)
    }
}
