/**
 * Authentication Status Handlers
 *
 * `GET /auth/check-auth` and `GET /auth/dashboard` accept either a bearer
 * token or the Google sign-in session cookie.
 *
 * # Resolution Order
 *
 * 1. `Authorization: Bearer` header, if present, decides alone: an invalid
 *    token is 401 even when a valid session cookie is also sent
 * 2. `session` cookie: the session's user id is re-read from the store; if
 *    the user no longer exists the session is destroyed
 * 3. Otherwise 401
 */

use axum::{extract::FromRequestParts, http::request::Parts, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::{AuthStatusResponse, SessionUser};
use crate::backend::auth::sessions::SESSION_COOKIE;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::bearer_token;
use crate::backend::server::state::AppState;
use crate::backend::storage::Collection;

/// Caller identified by bearer token or session cookie
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(token) = bearer_token(&parts.headers) {
            let verified = state.tokens.verify(token)?;
            return Ok(CurrentUser(SessionUser {
                user_id: verified.user_id,
                account_type: verified.role,
                username: None,
            }));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let Some(session_id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
            return Err(ApiError::unauthenticated());
        };

        let Some(user_id) = state.sessions.user_id(&session_id).await else {
            return Err(ApiError::unauthenticated());
        };

        let users: Collection<User> = Collection::new(state.store.clone());
        match get_user_by_id(&users, user_id).await? {
            Some(user) => Ok(CurrentUser(SessionUser {
                user_id: user.id,
                account_type: user.account_type,
                username: Some(user.username),
            })),
            None => {
                tracing::warn!("Session user {} no longer exists; destroying session", user_id);
                state.sessions.destroy(&session_id).await;
                Err(ApiError::unauthenticated())
            }
        }
    }
}

pub async fn check_auth(CurrentUser(user): CurrentUser) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        message: "User is authenticated".to_string(),
        user,
    })
}

pub async fn dashboard(CurrentUser(user): CurrentUser) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        message: "Welcome!".to_string(),
        user,
    })
}
