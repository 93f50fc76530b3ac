/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the construction of the document store.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by `main` through `dotenv`), with defaults for local development where
 * that is safe. `JWT_SECRET` has no default: the server refuses to start
 * without it.
 *
 * | Variable | Default |
 * |---|---|
 * | `JWT_SECRET` | required |
 * | `DATABASE_URL` | unset: in-memory store |
 * | `DB_CONNECT_TIMEOUT_SECS` | 10 |
 * | `SERVER_PORT` | 3000 |
 * | `BCRYPT_COST` | 10 |
 * | `SESSION_TTL_MINUTES` | 1440 |
 * | `APP_ENV` | `production` enables Secure cookies |
 * | `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_CALLBACK_URL` | unset: OAuth disabled |
 */

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::backend::storage::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_SESSION_TTL_MINUTES: u64 = 24 * 60;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Google OAuth client settings
///
/// Only present when all three of `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`
/// and `GOOGLE_CALLBACK_URL` are set.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    pub database_url: Option<String>,
    pub db_connect_timeout: Duration,
    pub server_port: u16,
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
    pub session_ttl: Duration,
    /// Mark cookies `Secure` (production only)
    pub secure_cookies: bool,
    pub google: Option<GoogleOAuthConfig>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let google = match (
            lookup("GOOGLE_CLIENT_ID"),
            lookup("GOOGLE_CLIENT_SECRET"),
            lookup("GOOGLE_CALLBACK_URL"),
        ) {
            (Some(client_id), Some(client_secret), Some(callback_url)) => Some(GoogleOAuthConfig {
                client_id,
                client_secret,
                callback_url,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "Incomplete Google OAuth configuration. GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET and GOOGLE_CALLBACK_URL are all required; OAuth routes will be disabled."
                );
                None
            }
        };

        Ok(Self {
            jwt_secret,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            db_connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            )?),
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            session_ttl: Duration::from_secs(
                parse_or(&lookup, "SESSION_TTL_MINUTES", DEFAULT_SESSION_TTL_MINUTES)? * 60,
            ),
            secure_cookies: lookup("APP_ENV").as_deref() == Some("production"),
            google,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    server_port: Option<u16>,
    bcrypt_cost: Option<u32>,
    session_ttl: Option<Duration>,
    secure_cookies: bool,
    google: Option<GoogleOAuthConfig>,
}

impl AppConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    pub fn secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn google(mut self, google: GoogleOAuthConfig) -> Self {
        self.google = Some(google);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            database_url: self.database_url,
            db_connect_timeout: Duration::from_secs(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            session_ttl: self
                .session_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_SESSION_TTL_MINUTES * 60)),
            secure_cookies: self.secure_cookies,
            google: self.google,
        })
    }
}

/// Build the document store for this configuration
///
/// Without `DATABASE_URL` the server runs on an in-memory store and logs a
/// warning. With it, a PostgreSQL pool is created (bounded by
/// `DB_CONNECT_TIMEOUT_SECS`) and the embedded migrations are run.
///
/// # Errors
///
/// Returns `ConfigError::Database` if the configured database cannot be
/// reached. Migration failures are logged but do not stop startup.
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>, ConfigError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using in-memory document store; data will not persist.");
        return Ok(Arc::new(MemoryDocumentStore::new()));
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .acquire_timeout(config.db_connect_timeout)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Arc::new(PgDocumentStore::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_jwt_secret_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "8080")]));
        assert!(matches!(result, Err(ConfigError::MissingValue("JWT_SECRET"))));
    }

    #[test]
    fn test_defaults_apply() {
        let config = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.session_ttl, Duration::from_secs(24 * 60 * 60));
        assert!(config.database_url.is_none());
        assert!(config.google.is_none());
        assert!(!config.secure_cookies);
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("SERVER_PORT", "eighty"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. })
        ));
    }

    #[test]
    fn test_partial_google_config_disables_oauth() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("GOOGLE_CLIENT_ID", "id"),
        ]))
        .unwrap();
        assert!(config.google.is_none());
    }

    #[test]
    fn test_production_enables_secure_cookies() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert!(config.secure_cookies);
    }

    #[test]
    fn test_builder_requires_secret() {
        assert!(AppConfig::builder().build().is_err());
        let config = AppConfig::builder().jwt_secret("x").bcrypt_cost(4).build().unwrap();
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .jwt_secret("x")
            .database_url("postgres://localhost/movieshelf")
            .server_port(8080)
            .session_ttl(Duration::from_secs(60))
            .secure_cookies(true)
            .build()
            .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/movieshelf"));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.session_ttl, Duration::from_secs(60));
        assert!(config.secure_cookies);
        assert!(config.google.is_none());
    }

    #[tokio::test]
    async fn test_load_store_without_database_url_uses_memory() {
        let config = AppConfig::builder().jwt_secret("x").build().unwrap();
        let store = load_store(&config).await.unwrap();
        assert!(store.find_all("movies").await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires PostgreSQL
    async fn test_load_store_with_database_url_uses_postgres() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let config = AppConfig::builder().jwt_secret("x").database_url(url).build().unwrap();
        let store = load_store(&config).await.unwrap();

        let collection = format!("test_{}", uuid::Uuid::new_v4().simple());
        let id = uuid::Uuid::new_v4();
        store
            .insert(&collection, id, serde_json::json!({ "n": 1 }))
            .await
            .unwrap();
        assert!(store.find_by_id(&collection, id).await.unwrap().is_some());
    }
}
