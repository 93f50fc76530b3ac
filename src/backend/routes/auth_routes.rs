/**
 * Account and Sign-in Routes
 *
 * ## Local accounts
 * - `POST /api/users/register` - open
 * - `POST /api/users/login` - open, returns a bearer token
 * - `POST /api/users/logout` - open
 * - `PUT /api/users/:id`, `DELETE /api/users/:id` - admin
 *
 * ## Google sign-in and sessions
 * - `GET /auth/google` - redirect to Google
 * - `GET /auth/google/callback` - create the session cookie
 * - `GET /auth/logout` - destroy the session cookie
 * - `GET /auth/check-auth`, `GET /auth/dashboard` - bearer token or session
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{
    check_auth, dashboard, delete_user, google_callback, google_start, login, logout, oauth,
    register, update_user,
};
use crate::backend::middleware::{gated, ADMINS};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users/logout", post(logout))
        .route(
            "/api/users/{id}",
            gated(put(update_user).delete(delete_user), app_state, ADMINS),
        )
        .route("/auth/google", get(google_start))
        .route("/auth/google/callback", get(google_callback))
        .route("/auth/logout", get(oauth::logout))
        .route("/auth/check-auth", get(check_auth))
        .route("/auth/dashboard", get(dashboard))
}
