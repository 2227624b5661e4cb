//! Cache Module
//!
//! Provides an in-memory byte cache whose entries are swept out by a
//! background reaper once they reach the configured age.

mod entry;
mod handle;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;
