//! Google OAuth 2.0 client
//!
//! Authorization-code flow with PKCE and a CSRF state token:
//! - `authorization_url` builds the redirect to Google and the state to keep
//!   in a short-lived cookie
//! - `exchange_code` trades the callback code for an access token
//! - `fetch_profile` reads the OpenID userinfo for that token
//!
//! The oauth2 client is rebuilt per call from validated endpoint values.

use oauth2::{
    basic::{BasicClient, BasicTokenResponse},
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, PkceCodeChallenge,
    PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::GoogleOAuthConfig;

/// Google OAuth authorization URL.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth token URL.
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OpenID Connect userinfo endpoint.
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const GOOGLE_SCOPES: &[&str] = &["openid", "profile", "email"];

/// Google OAuth errors.
#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("Google OAuth is not configured")]
    NotConfigured,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing auth state")]
    MissingAuthState,

    #[error("CSRF token mismatch")]
    CsrfMismatch,

    #[error("Provider returned an error: {0}")]
    Provider(String),

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Profile request error: {0}")]
    Profile(#[from] reqwest::Error),
}

/// State kept in a cookie between the redirect and the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAuthState {
    pub csrf_token: String,
    pub pkce_verifier: String,
}

/// Fields of the OpenID userinfo response used for account linking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleProfile {
    /// Stable Google account id
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct GoogleOAuthClient {
    client_id: ClientId,
    client_secret: ClientSecret,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    redirect_url: RedirectUrl,
    http: reqwest::Client,
}

impl GoogleOAuthClient {
    /// Creates a new Google OAuth client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the callback URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &GoogleOAuthConfig) -> Result<Self, OAuthError> {
        let redirect_url = RedirectUrl::new(config.callback_url.clone())
            .map_err(|e| OAuthError::Configuration(format!("invalid callback URL: {}", e)))?;
        let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
            .map_err(|e| OAuthError::Configuration(format!("invalid auth URL: {}", e)))?;
        let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
            .map_err(|e| OAuthError::Configuration(format!("invalid token URL: {}", e)))?;

        // Token endpoint redirects are never followed
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| OAuthError::Configuration(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            client_id: ClientId::new(config.client_id.clone()),
            client_secret: ClientSecret::new(config.client_secret.clone()),
            auth_url,
            token_url,
            redirect_url,
            http,
        })
    }

    /// Generates the authorization URL along with the state to store.
    pub fn authorization_url(&self) -> (String, GoogleAuthState) {
        let client = BasicClient::new(self.client_id.clone())
            .set_client_secret(self.client_secret.clone())
            .set_auth_uri(self.auth_url.clone())
            .set_redirect_uri(self.redirect_url.clone());

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut auth_request = client
            .authorize_url(CsrfToken::new_random)
            .set_pkce_challenge(pkce_challenge);

        for scope in GOOGLE_SCOPES {
            auth_request = auth_request.add_scope(Scope::new((*scope).to_string()));
        }

        let (auth_url, csrf_token) = auth_request.url();

        let state = GoogleAuthState {
            csrf_token: csrf_token.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        };

        (auth_url.to_string(), state)
    }

    /// Exchanges the authorization code for an access token.
    pub async fn exchange_code(&self, code: &str, pkce_verifier: &str) -> Result<String, OAuthError> {
        let client = BasicClient::new(self.client_id.clone())
            .set_client_secret(self.client_secret.clone())
            .set_token_uri(self.token_url.clone())
            .set_redirect_uri(self.redirect_url.clone());

        let token: BasicTokenResponse = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;

        Ok(token.access_token().secret().clone())
    }

    /// Fetches the signed-in user's OpenID profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, OAuthError> {
        let profile = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleProfile>()
            .await?;

        Ok(profile)
    }
}
