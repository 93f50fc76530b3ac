/**
 * External Identity Bridge
 *
 * Maps a Google profile to a local user. Users are matched on `googleId`
 * only; a Google sign-in never attaches to an existing password account,
 * even when the username or email matches.
 */

use crate::backend::auth::error::AuthError;
use crate::backend::auth::google::GoogleProfile;
use crate::backend::auth::users::{create_user, get_user_by_google_id, get_user_by_username, User};
use crate::backend::storage::{Collection, StoreError};
use crate::shared::Role;

/// Find the local user for a Google profile, creating one on first sign-in
///
/// New users get role `read` and a username taken from the profile's display
/// name, made unique if needed.
pub async fn link_external_identity(
    users: &Collection<User>,
    profile: &GoogleProfile,
) -> Result<User, AuthError> {
    if let Some(user) = get_user_by_google_id(users, &profile.sub).await? {
        tracing::info!("Google sign-in for existing user {}", user.id);
        return Ok(user);
    }

    let username = available_username(users, profile).await?;
    let mut user = User::new(username, Role::Read);
    user.google_id = Some(profile.sub.clone());

    let user = create_user(users, user).await?;
    tracing::info!("Created user {} from Google sign-in", user.username);
    Ok(user)
}

async fn available_username(
    users: &Collection<User>,
    profile: &GoogleProfile,
) -> Result<String, StoreError> {
    let base = profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("google-{}", profile.sub));

    if get_user_by_username(users, &base).await?.is_none() {
        return Ok(base);
    }

    let mut candidate = format!("{}-{}", base, profile.sub);
    let mut attempt = 1;
    while get_user_by_username(users, &candidate).await?.is_some() {
        attempt += 1;
        candidate = format!("{}-{}-{}", base, profile.sub, attempt);
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryDocumentStore;
    use std::sync::Arc;

    fn users() -> Collection<User> {
        Collection::new(Arc::new(MemoryDocumentStore::new()))
    }

    fn profile(sub: &str, name: Option<&str>) -> GoogleProfile {
        GoogleProfile {
            sub: sub.into(),
            name: name.map(str::to_string),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_first_sign_in_creates_read_user() {
        let users = users();
        let user = link_external_identity(&users, &profile("g1", Some("Ada Lovelace")))
            .await
            .unwrap();

        assert_eq!(user.username, "Ada Lovelace");
        assert_eq!(user.account_type, Role::Read);
        assert_eq!(user.google_id.as_deref(), Some("g1"));
        assert!(user.password.is_none());
    }

    #[tokio::test]
    async fn test_repeat_sign_in_returns_same_user() {
        let users = users();
        let first = link_external_identity(&users, &profile("g1", Some("Ada")))
            .await
            .unwrap();
        let second = link_external_identity(&users, &profile("g1", Some("Ada Renamed")))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(users.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_does_not_merge_with_password_account() {
        let users = users();
        let mut local = User::new("Ada".into(), Role::Admin);
        local.password = Some("$2b$04$hash".into());
        create_user(&users, local.clone()).await.unwrap();

        let linked = link_external_identity(&users, &profile("g1", Some("Ada")))
            .await
            .unwrap();

        assert_ne!(linked.id, local.id);
        assert_eq!(linked.username, "Ada-g1");
        assert_eq!(linked.account_type, Role::Read);
    }

    #[tokio::test]
    async fn test_missing_name_falls_back_to_google_id() {
        let users = users();
        let user = link_external_identity(&users, &profile("g42", None))
            .await
            .unwrap();
        assert_eq!(user.username, "google-g42");
    }
}
