//! services/api/src/bin/api.rs

use api_lib::{
    adapters::DocxRenderer,
    config::Config,
    error::ApiError,
    web::{router, AppState},
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");
    info!("CORS origins: {:?}", config.cors_origins);
    if config.reload {
        warn!("API_RELOAD is set, but this server does not reload itself; run it under a file watcher instead");
    }

    // --- 2. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        renderer: Arc::new(DocxRenderer::new()),
    });

    // --- 3. Create the Web Router ---
    let app = router(app_state);

    // --- 4. Start the Server ---
    let bind_address = config.bind_address();
    info!("Starting server on {}", bind_address);
    info!("Swagger UI available at http://{}/docs", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
