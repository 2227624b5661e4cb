//! Pokedex - interactive PokeAPI explorer
//!
//! Pages through location areas, serving repeated pages from an expiring cache.

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::repl::{self, Session};
use pokecache::{Cache, Config, PokeClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the PokeAPI client around the cache
/// 5. Run the prompt until `exit`, end of input, or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with prompt output
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn,pokecache=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        cache_interval = ?config.cache_interval,
        api_base_url = %config.api_base_url,
        request_timeout = ?config.request_timeout,
        "Configuration loaded"
    );

    let cache = Cache::new(config.cache_interval).context("invalid cache configuration")?;
    let cache = Arc::new(cache);
    let client =
        PokeClient::new(&config, cache.clone()).context("failed to build HTTP client")?;
    let mut session = Session::new(client);

    let stdin = repl::input::stdin_reader().context("failed to start input reader")?;
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result.context("prompt failed")?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    cache.shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}
