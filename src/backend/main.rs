/**
 * Movieshelf Server Entry Point
 *
 * Loads `.env`, initializes tracing and serves the Axum app on
 * `SERVER_PORT` (default 3000).
 */

use movieshelf::backend::server::config::load_store;
use movieshelf::backend::server::{create_app_with, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movieshelf=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Server initialization started");

    let config = AppConfig::from_env()?;
    let store = load_store(&config).await?;
    let app = create_app_with(&config, store);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
