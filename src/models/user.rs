use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rust_decimal::Decimal;
use thiserror::Error;

use super::Bet;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Opaque login credential: an argon2id hash of the password.
/// Verification is exact-match and case-sensitive over the input.
#[derive(Debug, Clone)]
pub struct Credential {
    hash: String,
}

impl Credential {
    pub fn derive(password: &str) -> Result<Self, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::Hash(e.to_string()))?
            .to_string();
        Ok(Self { hash })
    }

    pub fn verify(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Registry record for one user: credential, who they follow, and the
/// bets they have authored. The username is the primary key and never
/// changes; the friend and bet lists preserve insertion order.
#[derive(Debug, Clone)]
pub struct UserEntry {
    username: String,
    credential: Credential,
    friends: Vec<String>,
    bets: Vec<Bet>,
}

impl UserEntry {
    pub fn new(username: &str, credential: Credential) -> Self {
        Self {
            username: username.to_string(),
            credential,
            friends: Vec::new(),
            bets: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.credential.verify(password)
    }

    /// Follow `friend_username`. Silent no-op when already followed or
    /// when trying to follow yourself; duplicates never enter the list.
    pub fn add_friend(&mut self, friend_username: &str) {
        if friend_username != self.username
            && !self.friends.iter().any(|f| f == friend_username)
        {
            self.friends.push(friend_username.to_string());
        }
    }

    /// Author a new bet. No validation here: numeric bounds are the
    /// caller's responsibility.
    pub fn post_bet(&mut self, description: &str, event: &str, odds: Decimal, stake: Decimal) -> Bet {
        let bet = Bet::new(&self.username, description, event, odds, stake);
        self.bets.push(bet.clone());
        bet
    }

    /// Append a pre-built bet, bypassing timestamp assignment. Test-only.
    #[cfg(test)]
    pub(crate) fn push_bet(&mut self, bet: Bet) {
        self.bets.push(bet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str) -> UserEntry {
        UserEntry::new(username, Credential::derive("pw").unwrap())
    }

    #[test]
    fn test_credential_verify_exact_match() {
        let cred = Credential::derive("Secret1").unwrap();
        assert!(cred.verify("Secret1"));
        assert!(!cred.verify("secret1"), "verification must be case-sensitive");
        assert!(!cred.verify("Secret1 "));
        assert!(!cred.verify(""));
    }

    #[test]
    fn test_add_friend_rejects_self() {
        let mut alice = entry("alice");
        alice.add_friend("alice");
        assert!(alice.friends().is_empty());
    }

    #[test]
    fn test_add_friend_idempotent() {
        let mut alice = entry("alice");
        alice.add_friend("bob");
        alice.add_friend("bob");
        assert_eq!(alice.friends(), ["bob".to_string()]);
    }

    #[test]
    fn test_add_friend_preserves_insertion_order() {
        let mut alice = entry("alice");
        alice.add_friend("carol");
        alice.add_friend("bob");
        alice.add_friend("dave");
        assert_eq!(alice.friends(), ["carol", "bob", "dave"]);
    }

    #[test]
    fn test_post_bet_sets_author_and_appends() {
        let mut bob = entry("bob");
        let bet = bob.post_bet("Lakers win", "NBA Finals", Decimal::new(18, 1), Decimal::from(10));
        assert_eq!(bet.author, "bob");
        assert_eq!(bob.bets().len(), 1);
        assert_eq!(bob.bets()[0].description, "Lakers win");
    }
}
