//! Pokecache - An expiring in-memory byte cache
//!
//! Provides a thread-safe cache whose entries are reaped in the background
//! once they reach a fixed age, plus the Pokedex REPL client that reads
//! PokeAPI responses through it.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeClient;
pub use config::Config;
pub use tasks::spawn_reaper_task;
