//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age bookkeeping.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored value plus the instant of its most recent write.
///
/// Entries are never mutated; an overwrite replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Bytes,
    /// Monotonic creation instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    ///
    /// Used by `CacheStore::add` for every write.
    pub fn new(value: Bytes) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates a new entry stamped with an explicit instant.
    pub fn created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is due for removal.
    ///
    /// Boundary condition: an entry whose age equals the interval is stale.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.age(now) >= interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"data"));

        assert_eq!(entry.value, Bytes::from_static(b"data"));
        assert!(entry.age(Instant::now()) < Duration::from_secs(1));
    }

    #[test]
    fn test_entry_empty_value() {
        let entry = CacheEntry::new(Bytes::new());
        assert!(entry.value.is_empty());
    }

    #[test]
    fn test_age_saturates_before_creation() {
        let now = Instant::now();
        let entry = CacheEntry::created_at(Bytes::new(), now + Duration::from_secs(1));

        assert_eq!(entry.age(now), Duration::ZERO);
        assert!(!entry.is_stale(Duration::from_millis(1), now));
    }

    #[test]
    fn test_staleness_boundary_condition() {
        let start = Instant::now();
        let interval = Duration::from_millis(5);
        let entry = CacheEntry::created_at(Bytes::from_static(b"x"), start);

        assert!(!entry.is_stale(interval, start + Duration::from_millis(4)));
        assert!(
            entry.is_stale(interval, start + interval),
            "Entry should be stale once its age equals the interval"
        );
        assert!(entry.is_stale(interval, start + Duration::from_millis(9)));
    }
}
