/**
 * Bearer Tokens
 *
 * HS256 JWTs carrying `{userId, accountType, iat, exp}` with a one-hour
 * lifetime. Tokens are never persisted and cannot be revoked; verification
 * is pure computation against the process-wide secret.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::shared::Role;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub account_type: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Identity recovered from a valid token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken {
    pub user_id: Uuid,
    pub role: Role,
}

/// Signs and verifies bearer tokens with a single shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a token for a user, valid for one hour from now
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    /// * `role` - The user's account type at issue time
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, AuthError> {
        self.issue_at(user_id, role, chrono::Utc::now().timestamp())
    }

    pub(crate) fn issue_at(&self, user_id: Uuid, role: Role, now: i64) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            account_type: role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(AuthError::Signing)
    }

    /// Verify signature and expiry and return the embedded identity
    ///
    /// Any failure (bad signature, malformed token, expired) is reported as
    /// `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::warn!("Token verification failed: {:?}", e.kind());
            AuthError::InvalidToken
        })?;

        Ok(VerifiedToken {
            user_id: data.claims.user_id,
            role: data.claims.account_type,
        })
    }
}
