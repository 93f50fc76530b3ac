/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router and applies
 * the outer layers.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. `CorsLayer::permissive()` - open CORS
 * 3. `CatchPanicLayer` - a panicking handler answers 500 `{message}`
 *
 * Unknown paths fall through to a JSON 404.
 */

use axum::{routing::get, Json, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::{handle_panic, ApiError};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// ## Routes
///
/// - `GET /` - welcome message
/// - `/api/users/*`, `/auth/*` - see `auth_routes`
/// - `/api/movies`, `/api/media-types`, `/api/wishlists`, `/api/contacts` -
///   see `api_routes`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(root));

    let router = configure_auth_routes(router, &app_state);
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to My Movies API!"))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
