//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Sweeps stale cache entries once per configured interval

mod reaper;

pub use reaper::spawn_reaper_task;
