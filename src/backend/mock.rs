//! Fault-Injecting Backend (test only)
//!
//! Wraps a [`MemoryBackend`] and fails selected calls on demand, so the
//! facade's error propagation and partial-failure compensation can be
//! driven deterministically.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{BackendError, CacheBackend, MemoryBackend};

/// Backend whose failures are scripted by the test.
#[derive(Debug)]
pub struct FaultyBackend {
    inner: MemoryBackend,
    fail_gets: AtomicBool,
    fail_deletes: AtomicBool,
    /// When set, `set` calls for keys starting with this prefix fail.
    /// Lets a test fail the index write but not the entry write, or the
    /// other way around.
    fail_sets_matching: Mutex<Option<String>>,
}

impl FaultyBackend {
    pub fn new() -> Self {
        Self {
            inner: MemoryBackend::new(1024, 0),
            fail_gets: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            fail_sets_matching: Mutex::new(None),
        }
    }

    pub fn fail_gets(&self, on: bool) {
        self.fail_gets.store(on, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, on: bool) {
        self.fail_deletes.store(on, Ordering::SeqCst);
    }

    pub fn fail_sets_matching(&self, prefix: Option<&str>) {
        *self.fail_sets_matching.lock().unwrap() = prefix.map(str::to_string);
    }
}

impl Default for FaultyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheBackend for FaultyBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("injected get failure".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), BackendError> {
        let should_fail = self
            .fail_sets_matching
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|prefix| key.starts_with(prefix));
        if should_fail {
            return Err(BackendError::Unavailable("injected set failure".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool, BackendError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable(
                "injected delete failure".to_string(),
            ));
        }
        self.inner.delete(key).await
    }
}
