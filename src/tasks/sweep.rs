//! Expiry Sweep Task
//!
//! Background task that periodically drops expired entries from the
//! in-memory backend. This is the stand-in for the autonomous eviction a
//! real distributed cache performs on its own; the facade's
//! eviction-tolerance policy exists precisely because of it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::backend::MemoryBackend;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The returned JoinHandle is used to abort the task during graceful
/// shutdown.
pub fn spawn_sweep_task(backend: Arc<MemoryBackend>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = backend.sweep_expired().await;
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CacheBackend;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let backend = Arc::new(MemoryBackend::new(100, 1));
        backend.set("expire_soon", b"value".to_vec()).await.unwrap();

        let handle = spawn_sweep_task(Arc::clone(&backend), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(backend.is_empty().await);
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_unexpired_entries() {
        let backend = Arc::new(MemoryBackend::new(100, 3600));
        backend.set("long_lived", b"value".to_vec()).await.unwrap();

        let handle = spawn_sweep_task(Arc::clone(&backend), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            backend.get("long_lived").await.unwrap(),
            Some(b"value".to_vec())
        );
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let backend = Arc::new(MemoryBackend::new(100, 0));

        let handle = spawn_sweep_task(backend, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
