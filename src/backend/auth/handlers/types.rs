/**
 * Authentication Handler Types
 *
 * Request and response bodies for the user and auth endpoints. Request
 * fields are optional at the type level so that missing fields produce the
 * endpoint's own 400 message instead of a generic JSON rejection.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::Role;

/// Body of `POST /api/users/register`
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    /// Plain-text password, hashed before storage
    pub password: Option<String>,
    /// One of `read`, `read-write`, `admin`
    pub account_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// Body of `POST /api/users/login`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Returned by login. The token expires one hour after issue.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub account_type: Role,
}

/// Body of `PUT /api/users/:id`
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub account_type: Option<String>,
}

/// User information safe to return to clients (no password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub account_type: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            google_id: user.google_id,
            account_type: user.account_type,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Plain `{message}` body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identity reported by `/auth/check-auth` and `/auth/dashboard`
///
/// `username` is only known for cookie sessions, where the user record is
/// re-read; bearer tokens carry just the id and role.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: Uuid,
    pub account_type: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthStatusResponse {
    pub message: String,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_never_contains_password() {
        let mut user = User::new("alice".into(), Role::Admin);
        user.password = Some("$2b$10$secret".into());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["accountType"], "admin");
        assert!(json.get("_id").is_some());
    }
}
