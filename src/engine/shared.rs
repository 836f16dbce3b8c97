use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::models::{Bet, Credential, CredentialError};

use super::SocialEngine;

/// The social engine behind a coarse read-write lock, for use from the
/// async serving layer.
///
/// Mutations (register, follow, post) take the write lock; feed assembly
/// and listings take read access only. The inner engine stays purely
/// synchronous, so no lock is ever held across an await point.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SocialEngine>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SocialEngine::new())),
        }
    }

    /// Derive a credential from the password and register the user.
    /// `Ok(false)` means the username is taken; `Err` only on a hashing
    /// failure, which never reaches the registry.
    pub async fn register_user(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        let credential = Credential::derive(password)?;
        Ok(self.inner.write().await.register_user(username, credential))
    }

    /// True iff the username exists and the password verifies.
    pub async fn login_user(&self, username: &str, password: &str) -> bool {
        self.inner.read().await.login_user(username, password).is_some()
    }

    pub async fn add_friend(&self, username: &str, friend_username: &str) -> bool {
        self.inner.write().await.add_friend(username, friend_username)
    }

    pub async fn post_bet(
        &self,
        username: &str,
        description: &str,
        event: &str,
        odds: Decimal,
        stake: Decimal,
    ) -> Option<Bet> {
        self.inner
            .write()
            .await
            .post_bet(username, description, event, odds, stake)
    }

    pub async fn get_feed(&self, username: &str) -> Vec<Bet> {
        self.inner.read().await.get_feed(username)
    }

    pub async fn usernames(&self) -> Vec<String> {
        self.inner.read().await.usernames()
    }

    pub async fn friends_of(&self, username: &str) -> Option<Vec<String>> {
        self.inner
            .read()
            .await
            .get_user(username)
            .map(|u| u.friends().to_vec())
    }

    pub async fn bets_of(&self, username: &str) -> Option<Vec<Bet>> {
        self.inner
            .read()
            .await
            .get_user(username)
            .map(|u| u.bets().to_vec())
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.user_count()
    }
}
