//! Cache Reaper Task
//!
//! Background task that periodically sweeps stale entries out of a cache store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that reaps stale cache entries.
///
/// The task loops until `cancel` fires: it sleeps for `interval`, then takes
/// the store lock and removes every entry whose age has reached `interval`.
/// Cancellation is observed before each cycle and while sleeping, never in
/// the middle of a sweep.
///
/// # Arguments
/// * `store` - Shared store, locked with the same mutex readers and writers use
/// * `interval` - Sweep period and staleness threshold
/// * `cancel` - Token that stops the loop
///
/// # Returns
/// A JoinHandle that completes once the loop has observed cancellation.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let cancel = CancellationToken::new();
/// let handle = spawn_reaper_task(store.clone(), Duration::from_secs(5), cancel.clone());
/// // Later, during shutdown:
/// cancel.cancel();
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "Starting cache reaper");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.reap(interval, Instant::now());
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache sweep removed stale entries");
            } else {
                debug!(remaining, "Cache sweep found no stale entries");
            }
        }

        info!("Cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    const INTERVAL: Duration = Duration::from_millis(5);

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_stale_entries() {
        let store = shared_store();
        let cancel = CancellationToken::new();

        store
            .lock()
            .await
            .add("expire_soon".to_string(), Bytes::from_static(b"value"));

        let handle = spawn_reaper_task(store.clone(), INTERVAL, cancel.clone());

        // First sweep at t=5ms sees an age of exactly one interval
        tokio::time::sleep(Duration::from_millis(6)).await;
        assert!(
            store.lock().await.get("expire_soon").is_none(),
            "Stale entry should have been reaped"
        );

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = shared_store();
        let cancel = CancellationToken::new();
        let handle = spawn_reaper_task(store.clone(), INTERVAL, cancel.clone());

        tokio::time::sleep(Duration::from_millis(3)).await;
        store
            .lock()
            .await
            .add("fresh".to_string(), Bytes::from_static(b"value"));

        // Sweep at t=5ms sees an age of 2ms and keeps the entry
        tokio::time::sleep(Duration::from_millis(4)).await;
        assert_eq!(
            store.lock().await.get("fresh"),
            Some(Bytes::from_static(b"value"))
        );

        // Sweep at t=10ms sees an age of 7ms
        tokio::time::sleep(Duration::from_millis(4)).await;
        assert!(store.lock().await.get("fresh").is_none());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_stops_on_cancel() {
        let store = shared_store();
        let cancel = CancellationToken::new();
        let handle = spawn_reaper_task(store.clone(), INTERVAL, cancel.clone());

        cancel.cancel();
        handle.await.unwrap();

        // No sweep runs after cancellation
        store
            .lock()
            .await
            .add("kept".to_string(), Bytes::from_static(b"value"));
        tokio::time::sleep(INTERVAL * 4).await;
        assert!(store.lock().await.get("kept").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_accepts_huge_interval() {
        let store = shared_store();
        let cancel = CancellationToken::new();
        let handle = spawn_reaper_task(store.clone(), Duration::MAX, cancel.clone());

        store
            .lock()
            .await
            .add("forever".to_string(), Bytes::from_static(b"value"));
        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(store.lock().await.get("forever").is_some());

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let handle = spawn_reaper_task(shared_store(), INTERVAL, cancel);
        handle.await.unwrap();
    }
}
