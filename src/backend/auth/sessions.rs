/**
 * Server-Side Sessions
 *
 * Cookie sessions used only by the Google sign-in flow. A session maps an
 * opaque random id (the `session` cookie value) to a user id. Only the id is
 * kept; the user record is re-read on every cookie-authenticated request.
 * Sessions live in process memory and expire after the configured TTL.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use oauth2::CsrfToken;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone, Copy)]
struct SessionEntry {
    user_id: Uuid,
    created_at: Instant,
}

/// Shared session map
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for a user and return its id
    pub async fn create(&self, user_id: Uuid) -> String {
        // 256 bits of OsRng entropy, base64url encoded
        let session_id = CsrfToken::new_random_len(32).secret().clone();

        self.sessions.write().await.insert(
            session_id.clone(),
            SessionEntry {
                user_id,
                created_at: Instant::now(),
            },
        );
        tracing::info!("Session created for user {}", user_id);
        session_id
    }

    /// Resolve a session id to its user, dropping it if it has expired
    pub async fn user_id(&self, session_id: &str) -> Option<Uuid> {
        let entry = self.sessions.read().await.get(session_id).copied()?;

        if entry.created_at.elapsed() >= self.ttl {
            tracing::info!("Session expired for user {}", entry.user_id);
            self.destroy(session_id).await;
            return None;
        }

        Some(entry.user_id)
    }

    pub async fn destroy(&self, session_id: &str) {
        self.sessions.write().await.remove(session_id);
    }

    /// Drop every expired session
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.created_at.elapsed() < self.ttl);
        before - sessions.len()
    }
}
