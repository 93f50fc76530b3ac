/**
 * Authentication Errors
 *
 * Domain errors raised by token verification and the credential lifecycle.
 * They convert into `ApiError` at the handler boundary.
 */

use thiserror::Error;

use crate::backend::storage::StoreError;
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed, wrongly signed or expired bearer token
    #[error("Unauthorized: Invalid token")]
    InvalidToken,

    #[error("Username already exists")]
    DuplicateUsername,

    /// Unknown username, passwordless account or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
