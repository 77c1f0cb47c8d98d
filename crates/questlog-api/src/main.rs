//! Questlog API server entry point.

use std::error::Error;
use std::sync::Arc;

use questlog_api::config::Config;
use questlog_api::error::AppError;
use questlog_api::routes;
use questlog_api::state::AppState;
use questlog_store::SqliteRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
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

    tracing::info!("Starting Questlog API server");

    // Read configuration from environment.
    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    // Open the database, creating the file and schema on first start.
    let repository = SqliteRepository::connect(&config.database_url, config.max_connections)
        .await
        .map_err(AppError::from)?;
    tracing::info!(database_url = %config.database_url, "store ready");

    // Build application state.
    let app_state = AppState::new(Arc::new(repository));

    // Build router.
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
