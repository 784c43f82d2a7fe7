//! In-Memory Backend
//!
//! An in-process stand-in for the external distributed cache. It keeps the
//! ephemeral semantics the facade is written against: every entry carries a
//! TTL, and when the store is at capacity the oldest-inserted entry is
//! evicted to make room. Entries therefore disappear independently of any
//! explicit delete, which is exactly what the facade's eviction-tolerance
//! policy has to cope with.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use super::{BackendError, CacheBackend};

// == Stored Entry ==
/// A single raw entry as the underlying cache sees it.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: Vec<u8>,
    /// None = never expires
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }
}

// == Memory Store ==
/// Storage state guarded by the backend's lock.
#[derive(Debug, Default)]
struct MemoryStore {
    entries: HashMap<String, StoredEntry>,
    /// Insertion order, oldest at the front; drives capacity eviction.
    arrival: VecDeque<String>,
}

impl MemoryStore {
    /// Drops the oldest-inserted live entry. Stale arrival records for keys
    /// that were overwritten or deleted are skipped over.
    fn evict_oldest(&mut self) -> Option<String> {
        while let Some(key) = self.arrival.pop_front() {
            if self.entries.remove(&key).is_some() {
                return Some(key);
            }
        }
        None
    }
}

// == Memory Backend ==
/// In-memory ephemeral cache with TTL expiry and capacity eviction.
#[derive(Debug)]
pub struct MemoryBackend {
    store: RwLock<MemoryStore>,
    /// Maximum number of entries held at once
    max_entries: usize,
    /// TTL applied to every entry; None = entries never expire
    default_ttl: Option<Duration>,
}

impl MemoryBackend {
    /// Creates a backend holding at most `max_entries` entries, each living
    /// for `default_ttl_secs` seconds (0 = no expiry).
    pub fn new(max_entries: usize, default_ttl_secs: u64) -> Self {
        let default_ttl = if default_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(default_ttl_secs))
        };
        Self {
            store: RwLock::new(MemoryStore::default()),
            max_entries,
            default_ttl,
        }
    }

    /// Removes all expired entries, returning how many were dropped.
    /// Called periodically by the background sweep task.
    pub async fn sweep_expired(&self) -> usize {
        let mut store = self.store.write().await;

        let expired: Vec<String> = store
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            store.entries.remove(key);
        }
        let MemoryStore { entries, arrival } = &mut *store;
        arrival.retain(|key| entries.contains_key(key));

        expired.len()
    }

    /// Current number of live entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.entries.len()
    }

    /// Returns true if no entries are held.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.entries.is_empty()
    }
}

impl CacheBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        // Expired entries read as misses; reclamation is left to the sweep
        // task so reads stay on the shared lock.
        let store = self.store.read().await;
        match store.entries.get(key) {
            Some(entry) if !entry.is_expired() => Ok(Some(entry.value.clone())),
            _ => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), BackendError> {
        let mut store = self.store.write().await;

        let is_overwrite = store.entries.contains_key(key);
        if !is_overwrite && store.entries.len() >= self.max_entries {
            if let Some(evicted) = store.evict_oldest() {
                tracing::debug!(key = %evicted, "evicted entry at capacity");
            }
        }

        store
            .entries
            .insert(key.to_string(), StoredEntry::new(value, self.default_ttl));
        if !is_overwrite {
            store.arrival.push_back(key.to_string());
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, BackendError> {
        let mut store = self.store.write().await;
        Ok(store.entries.remove(key).is_some())
    }
}
