//! Pokedex - An interactive shell over the PokeAPI
//!
//! Browse location areas, explore them and catch pokemon into an in-memory
//! Pokedex. API responses are cached for the configured interval.

use anyhow::Result;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so it never mixes with the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweep task
/// 4. Build the API client and session
/// 5. Run the REPL until `exit`, end of input or Ctrl+C
/// 6. Shut the cache down and wait for the sweep to stop
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pokedex");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, api_base_url={}, request_timeout={}s",
        config.cache_interval, config.api_base_url, config.request_timeout
    );

    let cache = Cache::new(config.cache_interval())?;
    info!("Response cache initialized");

    let client = PokeApiClient::new(cache.clone(), &config)?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let mut interrupted = false;
    let result = tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => result,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            interrupted = true;
            Ok(())
        }
    };

    if let Some(sweeper) = cache.shutdown() {
        if let Err(err) = sweeper.await {
            warn!("Cache sweep task ended abnormally: {}", err);
        }
    }
    info!("Pokedex shutdown complete");

    if interrupted {
        // A pending stdin read cannot be cancelled and would stall runtime shutdown
        println!();
        std::process::exit(0);
    }

    result
}
