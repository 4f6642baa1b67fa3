//! Cliffhanger story service entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use cliffhanger_api::config::AppConfig;
use cliffhanger_api::state::AppState;
use cliffhanger_core::clock::{Clock, SystemClock};
use cliffhanger_core::repository::SessionRepository;
use cliffhanger_core::rng::{DeterministicRng, StdRngSource};
use cliffhanger_session_store::memory_session_repository::InMemorySessionRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Cliffhanger story server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;

    let rng_source = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            StdRngSource::seeded(seed)
        }
        None => StdRngSource::from_entropy(),
    };

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng_source));
    let session_repository: Arc<dyn SessionRepository> =
        Arc::new(InMemorySessionRepository::new());
    let app_state = AppState::new(clock, rng, session_repository, config.story);

    let app = cliffhanger_api::build_router(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!(max_beats = config.story.max_beats, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
