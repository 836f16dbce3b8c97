use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

/// Maps opaque session tokens to usernames.
///
/// Login mints a token, protected requests resolve it, logout revokes
/// it. Tokens have no expiry: sessions live as long as the process,
/// matching the in-memory registry they guard.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Mint a fresh token bound to `username`.
    pub async fn create(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        let mut sessions = self.inner.lock().await;
        sessions.insert(token, username.to_string());
        tracing::debug!(
            username,
            active_sessions = sessions.len(),
            "Session created"
        );
        token
    }

    /// Username bound to `token`, if the session is live.
    pub async fn resolve(&self, token: &Uuid) -> Option<String> {
        self.inner.lock().await.get(token).cloned()
    }

    /// Revoke a session. Returns `false` if the token was not live.
    pub async fn revoke(&self, token: &Uuid) -> bool {
        let mut sessions = self.inner.lock().await;
        let removed = sessions.remove(token);
        if let Some(username) = &removed {
            tracing::debug!(
                %username,
                active_sessions = sessions.len(),
                "Session revoked"
            );
        }
        removed.is_some()
    }
}
