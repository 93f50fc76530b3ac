/**
 * Credential Lifecycle
 *
 * Registration, password login, credential updates and deletion for local
 * accounts. Passwords are stored as bcrypt hashes and compared with
 * `bcrypt::verify`.
 *
 * Usernames are trimmed on every path (register, login, update) before
 * they are stored or looked up.
 *
 * Username uniqueness is checked before writing, not enforced by the store,
 * so two concurrent registrations of the same name can both succeed.
 */

use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::users::{
    create_user, get_user_by_id, get_user_by_username, save_user, User,
};
use crate::backend::storage::Collection;
use crate::shared::{require_text, Role};

/// Fields accepted by `update_credentials`
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Credential operations bound to the users collection and a bcrypt cost
#[derive(Clone)]
pub struct Credentials {
    users: Collection<User>,
    bcrypt_cost: u32,
}

impl Credentials {
    pub fn new(users: Collection<User>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Register a new password account
    ///
    /// # Errors
    /// * `DuplicateUsername` - a user with this username exists
    pub async fn register(
        &self,
        username: String,
        password: String,
        role: Role,
    ) -> Result<User, AuthError> {
        let username = require_text("username", Some(username))?;
        if get_user_by_username(&self.users, &username).await?.is_some() {
            tracing::warn!("Registration rejected, username taken: {}", username);
            return Err(AuthError::DuplicateUsername);
        }

        let mut user = User::new(username, role);
        user.password = Some(self.hash(password).await?);

        let user = create_user(&self.users, user).await?;
        tracing::info!("User registered: {} ({})", user.username, user.account_type);
        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// Unknown users, accounts without a password and wrong passwords all
    /// yield `InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        let user = get_user_by_username(&self.users, username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", username);
                AuthError::InvalidCredentials
            })?;

        let Some(hash) = user.password.clone() else {
            tracing::warn!("Password login attempted for passwordless account: {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        let password = password.to_string();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

        if !valid {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Apply the supplied changes to a user
    ///
    /// # Errors
    /// * `UserNotFound` - no user with this id
    /// * `DuplicateUsername` - the new username belongs to another user
    pub async fn update_credentials(
        &self,
        id: Uuid,
        update: CredentialUpdate,
    ) -> Result<User, AuthError> {
        let mut user = get_user_by_id(&self.users, id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(username) = update.username {
            let username = require_text("username", Some(username))?;
            if let Some(existing) = get_user_by_username(&self.users, &username).await? {
                if existing.id != user.id {
                    return Err(AuthError::DuplicateUsername);
                }
            }
            user.username = username;
        }

        if let Some(password) = update.password {
            // Passwords are hashed as given; only blank ones are refused
            require_text("password", Some(password.clone()))?;
            user.password = Some(self.hash(password).await?);
        }

        if let Some(role) = update.role {
            user.account_type = role;
        }

        if !save_user(&self.users, &mut user).await? {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!("User updated: {}", user.id);
        Ok(user)
    }

    /// Hard-delete a user
    pub async fn delete(&self, id: Uuid) -> Result<(), AuthError> {
        if !self.users.delete(id).await? {
            return Err(AuthError::UserNotFound);
        }
        tracing::info!("User deleted: {}", id);
        Ok(())
    }

    async fn hash(&self, password: String) -> Result<String, AuthError> {
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryDocumentStore;
    use std::sync::Arc;

    fn credentials() -> Credentials {
        let users = Collection::new(Arc::new(MemoryDocumentStore::new()));
        Credentials::new(users, 4) // bcrypt minimum cost (bcrypt::MIN_COST is private)
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let credentials = credentials();
        let user = credentials
            .register("u1".into(), "p1".into(), Role::ReadWrite)
            .await
            .unwrap();

        assert_ne!(user.password.as_deref(), Some("p1"));

        let authed = credentials.authenticate("u1", "p1").await.unwrap();
        assert_eq!(authed.id, user.id);
        assert_eq!(authed.account_type, Role::ReadWrite);
    }

    #[tokio::test]
    async fn test_duplicate_username_keeps_first_record() {
        let credentials = credentials();
        let first = credentials
            .register("dup".into(), "first".into(), Role::Read)
            .await
            .unwrap();

        let second = credentials
            .register("dup".into(), "second".into(), Role::Admin)
            .await;
        assert!(matches!(second, Err(AuthError::DuplicateUsername)));

        let still_first = credentials.authenticate("dup", "first").await.unwrap();
        assert_eq!(still_first.id, first.id);
        assert_eq!(still_first.account_type, Role::Read);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let credentials = credentials();
        credentials
            .register("u1".into(), "p1".into(), Role::Read)
            .await
            .unwrap();

        let wrong = credentials.authenticate("u1", "nope").await.unwrap_err();
        let unknown = credentials.authenticate("ghost", "p1").await.unwrap_err();

        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn test_update_rehashes_password_and_changes_role() {
        let credentials = credentials();
        let user = credentials
            .register("u1".into(), "old".into(), Role::Read)
            .await
            .unwrap();

        credentials
            .update_credentials(
                user.id,
                CredentialUpdate {
                    password: Some("new".into()),
                    role: Some(Role::Admin),
                    ..CredentialUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!(credentials.authenticate("u1", "old").await.is_err());
        let updated = credentials.authenticate("u1", "new").await.unwrap();
        assert_eq!(updated.account_type, Role::Admin);
    }

    #[tokio::test]
    async fn test_update_rejects_username_of_another_user() {
        let credentials = credentials();
        credentials
            .register("taken".into(), "p".into(), Role::Read)
            .await
            .unwrap();
        let user = credentials
            .register("mine".into(), "p".into(), Role::Read)
            .await
            .unwrap();

        let result = credentials
            .update_credentials(
                user.id,
                CredentialUpdate {
                    username: Some("taken".into()),
                    ..CredentialUpdate::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AuthError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_username_is_trimmed_on_register_and_login() {
        let credentials = credentials();
        let user = credentials
            .register(" bob ".into(), "p".into(), Role::Read)
            .await
            .unwrap();
        assert_eq!(user.username, "bob");

        assert_eq!(credentials.authenticate("bob", "p").await.unwrap().id, user.id);
        assert_eq!(credentials.authenticate(" bob", "p").await.unwrap().id, user.id);

        let again = credentials.register("bob ".into(), "q".into(), Role::Admin).await;
        assert!(matches!(again, Err(AuthError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_update_keeps_password_whitespace() {
        let credentials = credentials();
        let user = credentials
            .register("u1".into(), "p".into(), Role::Read)
            .await
            .unwrap();

        credentials
            .update_credentials(
                user.id,
                CredentialUpdate {
                    password: Some(" spaced ".into()),
                    ..CredentialUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!(credentials.authenticate("u1", " spaced ").await.is_ok());
        assert!(credentials.authenticate("u1", "spaced").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_unknown_user_is_not_found() {
        let credentials = credentials();
        assert!(matches!(
            credentials.delete(Uuid::new_v4()).await,
            Err(AuthError::UserNotFound)
        ));
    }
}
