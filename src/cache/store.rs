//! Cache Store Module
//!
//! Plain key/value map of timestamped byte entries. Holds no lock of its own;
//! [`Cache`](super::Cache) owns it behind a single mutex.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Mapping from opaque string keys to timestamped byte values.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a value under `key`, stamped with the current instant.
    ///
    /// An existing entry is replaced wholesale, which also resets its age.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    /// Stores a value with an explicit creation instant.
    pub(crate) fn add_at(&mut self, key: String, value: Bytes, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::created_at(value, created_at));
    }

    // == Get ==
    /// Returns the stored value, or `None` if the key is absent.
    ///
    /// No expiry check happens here: only a sweep removes stale entries.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry whose age at `now` has reached `interval`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, interval: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_stale(interval, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
