use std::net::SocketAddr;
use std::sync::Arc;

use search_service::config::Config;
use search_service::storage::{MongoTextStore, TextSearchStore};

/// Port the HTTP API is published on.
const HTTP_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Diagnostics:
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("search_service=debug,tower_http=debug,info")
            }),
        )
        .init();

    // 2. Configuration:
    let config = Config::from_env();
    tracing::info!(
        "Using database '{}' collection '{}'",
        config.database,
        config.collection
    );

    // 3. Storage layer:
    let store: Arc<dyn TextSearchStore> = Arc::new(MongoTextStore::connect(&config).await?);

    // 4. HTTP Router:
    let app = search_service::app(store);

    // 5. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], HTTP_PORT));
    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
