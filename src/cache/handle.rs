//! Cache Handle Module
//!
//! The explicitly constructed, thread-safe cache: a lock-guarded store plus
//! the reaper task whose lifetime is tied to it.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

/// How long `shutdown` waits for the reaper to observe cancellation.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

// == Cache ==
/// Expiring key/value cache of opaque byte values.
///
/// Every read, write and sweep goes through one mutex, so operations are
/// linearizable. A background reaper removes entries once their age reaches
/// the configured interval; between sweeps a stale entry is still readable,
/// so an entry lives for at most two intervals.
///
/// Share it between tasks with `Arc<Cache>`. Dropping the last handle stops
/// the reaper; [`Cache::shutdown`] stops it and waits for it to finish.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use pokecache::cache::Cache;
///
/// # async fn example() -> pokecache::error::Result<()> {
/// let cache = Cache::new(Duration::from_secs(5))?;
/// cache.add("https://pokeapi.co/api/v2/location-area", b"{}".to_vec()).await;
/// assert!(cache.get("https://pokeapi.co/api/v2/location-area").await.is_some());
/// cache.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache {
    /// Entries, guarded by the single cache lock
    store: Arc<Mutex<CacheStore>>,
    /// Reap period and staleness threshold
    interval: Duration,
    /// Stops the reaper
    cancel: CancellationToken,
    /// Reaper task, taken on shutdown
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache and starts its reaper.
    ///
    /// # Errors
    /// - `CacheError::InvalidInterval` if `interval` is zero
    /// - `CacheError::NoRuntime` if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let cancel = CancellationToken::new();
        let reaper = spawn_reaper_task(store.clone(), interval, cancel.clone());

        Ok(Self {
            store,
            interval,
            cancel,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its reap clock.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the cached value for `key`, or `None` on a miss.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held, stale or not.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Interval ==
    /// Returns the configured reap interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Idempotent. The cache stays usable afterwards, but nothing is reaped.
    pub async fn shutdown(&self) {
        self.cancel.cancel();

        let Some(handle) = self.reaper.lock().await.take() else {
            return;
        };

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
            Ok(Ok(())) => debug!("Cache reaper joined"),
            Ok(Err(e)) => warn!(error = %e, "Cache reaper task failed"),
            Err(_) => warn!(
                timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
                "Cache reaper did not stop within timeout"
            ),
        }
    }

    // == Is Running ==
    /// Returns true while the reaper task is alive.
    pub async fn is_running(&self) -> bool {
        let guard = self.reaper.lock().await;
        guard.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
