//! Shift engine HTTP service.
//!
//! Usage: `shift-engine [CONFIG_PATH]`. Without a path, `SHIFT_ENGINE_CONFIG`
//! is consulted, and without that the built-in defaults apply.

use std::sync::Arc;

use tracing::info;

use shift_engine::api::{AppState, create_router};
use shift_engine::availability::InMemoryCommitmentStore;
use shift_engine::config::ConfigLoader;
use shift_engine::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SHIFT_ENGINE_CONFIG").ok());

    let loader = match &config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };

    logging::init(&loader.config().logging)?;

    let seed = loader.config().commitments.clone();
    let seeded = seed.len();
    let store = Arc::new(InMemoryCommitmentStore::with_commitments(seed));

    let bind_address = loader.config().server.bind_address.clone();
    info!(
        config = config_path.as_deref().unwrap_or("<defaults>"),
        seeded_commitments = seeded,
        store_timeout_ms = loader.config().availability.store_timeout_ms,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader, store));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Shift engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
