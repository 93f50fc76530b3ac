/**
 * Server Initialization
 *
 * Builds the application from configuration:
 * 1. Load `AppConfig` from the environment
 * 2. Connect the document store (PostgreSQL or in-memory)
 * 3. Create `AppState` and the router
 * 4. Start the periodic session purge
 *
 * `create_app_with` skips the environment and takes a ready store, which is
 * how the integration tests build the app.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, AppConfig, ConfigError};
use crate::backend::server::state::AppState;
use crate::backend::storage::DocumentStore;

/// Interval between expired session sweeps
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application from the environment
///
/// # Errors
///
/// * `ConfigError::MissingValue` - `JWT_SECRET` is not set
/// * `ConfigError::InvalidValue` - a numeric setting does not parse
/// * `ConfigError::Database` - `DATABASE_URL` is set but unreachable
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing movieshelf backend server");

    let config = AppConfig::from_env()?;
    let store = load_store(&config).await?;

    Ok(create_app_with(&config, store))
}

/// Create the application over an already connected store
pub fn create_app_with(config: &AppConfig, store: Arc<dyn DocumentStore>) -> Router<()> {
    let app_state = AppState::new(config, store);

    let sessions = app_state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired sessions", purged);
            }
        }
    });

    tracing::info!(
        "Application state initialized (google sign-in {})",
        if app_state.google.is_some() { "enabled" } else { "disabled" }
    );

    create_router(app_state)
}
