//! Error types for the cache and the Pokedex client
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error; these types only describe construction misuse and client failures.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a [`Cache`](crate::cache::Cache).
#[derive(Error, Debug)]
pub enum CacheError {
    /// The reap interval must be strictly positive
    #[error("Invalid cache interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),

    /// The reaper needs a tokio runtime to be spawned on
    #[error("No tokio runtime available to run the reaper task")]
    NoRuntime,
}

// == Client Error Enum ==
/// Errors raised while fetching or decoding remote resources.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("Unexpected response status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Body was not the expected JSON document
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Command Error Enum ==
/// Errors raised by REPL commands.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Underlying fetch failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// `mapb` issued before any page, or while on the first page
    #[error("No previous locations to show")]
    NoPreviousPage,

    /// `map` issued while already on the last page
    #[error("No more locations to show")]
    NoNextPage,

    /// Writing to the output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Aliases ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Convenience Result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Convenience Result type for REPL commands.
pub type CommandResult<T> = std::result::Result<T, CommandError>;
