//! Google sign-in handlers
//!
//! - `GET /auth/google` - redirect to Google with CSRF state and PKCE
//! - `GET /auth/google/callback` - finish sign-in, start a cookie session
//! - `GET /auth/logout` - end the cookie session
//!
//! Without Google configuration the first two answer 503.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration as TimeDuration;

use crate::backend::auth::bridge::link_external_identity;
use crate::backend::auth::google::{GoogleAuthState, GoogleOAuthClient, OAuthError};
use crate::backend::auth::sessions::{SessionStore, SESSION_COOKIE};
use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::storage::Collection;

/// Cookie holding the CSRF token and PKCE verifier between redirect and callback.
const GOOGLE_AUTH_STATE_COOKIE: &str = "google_auth_state";

const SIGNED_IN_REDIRECT: &str = "/auth/dashboard";
const FAILURE_REDIRECT: &str = "/";

/// Query parameters of the provider callback.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by Google when the user denies consent
    pub error: Option<String>,
}

/// Initiates Google sign-in.
pub async fn google_start(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let google = app_state.google.as_ref().ok_or(OAuthError::NotConfigured)?;

    let (auth_url, auth_state) = google.authorization_url();
    let state_json = serde_json::to_string(&auth_state)
        .map_err(|e| ApiError::internal(format!("serialize OAuth state: {}", e)))?;

    let cookie = Cookie::build((GOOGLE_AUTH_STATE_COOKIE, state_json))
        .path("/")
        .http_only(true)
        .secure(app_state.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(10));

    Ok((jar.add(cookie), Redirect::to(&auth_url)))
}

/// Handles the OAuth callback from Google.
///
/// Any provider-side failure redirects to `/` instead of returning an error.
pub async fn google_callback(
    State(app_state): State<AppState>,
    State(users): State<Collection<User>>,
    Query(query): Query<GoogleCallbackQuery>,
    jar: CookieJar,
) -> Result<Response, ApiError> {
    let google = app_state.google.as_ref().ok_or(OAuthError::NotConfigured)?;

    let auth_state = jar
        .get(GOOGLE_AUTH_STATE_COOKIE)
        .and_then(|cookie| serde_json::from_str::<GoogleAuthState>(cookie.value()).ok());
    let jar = jar.add(expired_cookie(GOOGLE_AUTH_STATE_COOKIE));

    let user = match complete_sign_in(google, &users, auth_state, query).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Google sign-in failed: {}", e);
            return Ok((jar, Redirect::to(FAILURE_REDIRECT)).into_response());
        }
    };

    let session_id = app_state.sessions.create(user.id).await;
    let session_cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .secure(app_state.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::seconds(
            app_state.sessions.ttl().as_secs() as i64,
        ));

    tracing::info!("User signed in with Google: {}", user.username);
    Ok((jar.add(session_cookie), Redirect::to(SIGNED_IN_REDIRECT)).into_response())
}

async fn complete_sign_in(
    google: &GoogleOAuthClient,
    users: &Collection<User>,
    auth_state: Option<GoogleAuthState>,
    query: GoogleCallbackQuery,
) -> Result<User, ApiError> {
    if let Some(error) = query.error {
        return Err(OAuthError::Provider(error).into());
    }

    let auth_state = auth_state.ok_or(OAuthError::MissingAuthState)?;
    let (Some(code), Some(state)) = (query.code, query.state) else {
        return Err(OAuthError::MissingAuthState.into());
    };

    if state != auth_state.csrf_token {
        return Err(OAuthError::CsrfMismatch.into());
    }

    let access_token = google.exchange_code(&code, &auth_state.pkce_verifier).await?;
    let profile = google.fetch_profile(&access_token).await?;

    Ok(link_external_identity(users, &profile).await?)
}

/// Ends the cookie session and redirects home.
pub async fn logout(State(sessions): State<SessionStore>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        sessions.destroy(cookie.value()).await;
        tracing::info!("Session ended");
    }

    (jar.add(expired_cookie(SESSION_COOKIE)), Redirect::to("/"))
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(TimeDuration::ZERO)
        .build()
}
