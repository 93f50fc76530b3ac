/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every handler. It
 * holds:
 * - The document store handle (PostgreSQL or in-memory)
 * - The token issuer (signing/verification keys)
 * - The session store used by Google sign-in
 * - Credential operations (users collection + bcrypt cost)
 * - The Google OAuth client, if configured
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only what they need,
 * e.g. `State(tokens): State<TokenIssuer>`. Typed collections are extracted
 * the same way (`State<Collection<Movie>>`, see `storage::collection`).
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::google::GoogleOAuthClient;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::auth::tokens::TokenIssuer;
use crate::backend::server::config::AppConfig;
use crate::backend::storage::{Collection, DocumentStore};

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Document store shared by all collections
    pub store: Arc<dyn DocumentStore>,

    /// Bearer token signing and verification
    pub tokens: TokenIssuer,

    /// Cookie sessions created by Google sign-in
    ///
    /// The only mutable shared structure; guarded by a `tokio::sync::RwLock`
    /// inside `SessionStore`.
    pub sessions: SessionStore,

    /// Register/login/update/delete for local accounts
    pub credentials: Credentials,

    /// `None` when Google OAuth is not configured; the OAuth routes then
    /// answer 503
    pub google: Option<GoogleOAuthClient>,

    /// Whether cookies are marked `Secure`
    pub secure_cookies: bool,
}

impl AppState {
    /// Build state from configuration and an already-initialised store
    ///
    /// An invalid Google configuration is logged and leaves OAuth disabled.
    pub fn new(config: &AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let google = config.google.as_ref().and_then(|google| {
            match GoogleOAuthClient::new(google) {
                Ok(client) => {
                    tracing::info!("Google OAuth enabled");
                    Some(client)
                }
                Err(e) => {
                    tracing::error!("Failed to configure Google OAuth: {}", e);
                    tracing::warn!("Google sign-in will be disabled.");
                    None
                }
            }
        });

        Self {
            tokens: TokenIssuer::new(&config.jwt_secret),
            sessions: SessionStore::new(config.session_ttl),
            credentials: Credentials::new(Collection::new(store.clone()), config.bcrypt_cost),
            google,
            secure_cookies: config.secure_cookies,
            store,
        }
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Credentials {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
