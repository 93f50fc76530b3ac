/**
 * User Model and Store Operations
 *
 * Users live in the `users` collection. A user may have a bcrypt password
 * hash, a Google account id, or both; nothing enforces that exactly one is
 * present.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::storage::{Collection, Document, StoreError};
use crate::shared::Role;

/// User record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID)
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt). Absent for accounts created through Google.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Google account id (`sub` claim), unique when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub account_type: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl User {
    pub fn new(username: String, account_type: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password: None,
            google_id: None,
            account_type,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Create a new user
///
/// # Returns
/// The stored user, or `StoreError` if the insert failed
pub async fn create_user(users: &Collection<User>, user: User) -> Result<User, StoreError> {
    users.insert(&user).await?;
    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    users: &Collection<User>,
    username: &str,
) -> Result<Option<User>, StoreError> {
    users.find_one_by("username", username).await
}

/// Get user by ID
pub async fn get_user_by_id(users: &Collection<User>, id: Uuid) -> Result<Option<User>, StoreError> {
    users.find_by_id(id).await
}

/// Get user by Google account id
pub async fn get_user_by_google_id(
    users: &Collection<User>,
    google_id: &str,
) -> Result<Option<User>, StoreError> {
    users.find_one_by("googleId", google_id).await
}

/// Persist changes to a user, bumping `updated_at`
///
/// # Returns
/// `false` if the user was deleted in the meantime
pub async fn save_user(users: &Collection<User>, user: &mut User) -> Result<bool, StoreError> {
    user.updated_at = Utc::now();
    users.replace(user).await
}
