use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Bet, Credential, UserEntry};

/// In-memory user registry and feed engine.
///
/// Purely synchronous: every operation is a single check-then-mutate
/// step that runs to completion, and every failure is a boolean or
/// sentinel return. Wrap in [`super::SharedEngine`] for concurrent use
/// from the serving layer.
#[derive(Debug, Default)]
pub struct SocialEngine {
    users: HashMap<String, UserEntry>,
}

impl SocialEngine {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Register a new user. Returns `false` (and mutates nothing) iff
    /// the username is already taken. Usernames are case-sensitive.
    pub fn register_user(&mut self, username: &str, credential: Credential) -> bool {
        if self.users.contains_key(username) {
            return false;
        }
        self.users
            .insert(username.to_string(), UserEntry::new(username, credential));
        tracing::info!(username, total_users = self.users.len(), "User registered");
        true
    }

    /// Authenticate. `Some` iff the username exists and the password
    /// verifies against the stored credential. Read-only.
    pub fn login_user(&self, username: &str, password: &str) -> Option<&UserEntry> {
        self.users
            .get(username)
            .filter(|user| user.verify_password(password))
    }

    /// Make `username` follow `friend_username`. Returns `false` iff
    /// either username is unregistered. The edge is one-directional;
    /// self-follows and duplicates are silent no-ops (still `true`).
    pub fn add_friend(&mut self, username: &str, friend_username: &str) -> bool {
        if !self.users.contains_key(friend_username) {
            return false;
        }
        let Some(user) = self.users.get_mut(username) else {
            return false;
        };
        user.add_friend(friend_username);
        tracing::debug!(follower = username, followed = friend_username, "Friend edge added");
        true
    }

    /// Post a bet as `username`. `None` iff the author is unregistered.
    pub fn post_bet(
        &mut self,
        username: &str,
        description: &str,
        event: &str,
        odds: Decimal,
        stake: Decimal,
    ) -> Option<Bet> {
        let user = self.users.get_mut(username)?;
        let bet = user.post_bet(description, event, odds, stake);
        tracing::debug!(author = username, event, %odds, %stake, "Bet posted");
        Some(bet)
    }

    /// Assemble `username`'s feed: every bet authored by a direct friend,
    /// most recent first. Recomputed in full on every call.
    ///
    /// Traverses the friend list in order, appending each friend's bets
    /// in authored order and silently skipping friend usernames with no
    /// registry entry. The final sort is stable, so bets with equal
    /// timestamps keep traversal order. Unregistered `username` yields
    /// an empty feed.
    pub fn get_feed(&self, username: &str) -> Vec<Bet> {
        let Some(user) = self.users.get(username) else {
            return Vec::new();
        };

        let mut feed: Vec<Bet> = Vec::new();
        for friend_username in user.friends() {
            if let Some(friend) = self.users.get(friend_username) {
                feed.extend(friend.bets().iter().cloned());
            }
        }
        feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        feed
    }

    pub fn get_user(&self, username: &str) -> Option<&UserEntry> {
        self.users.get(username)
    }

    /// All registered usernames, sorted for a stable listing.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[cfg(test)]
    pub(crate) fn entry_mut(&mut self, username: &str) -> Option<&mut UserEntry> {
        self.users.get_mut(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn engine_with(users: &[&str]) -> SocialEngine {
        let mut engine = SocialEngine::new();
        for user in users {
            assert!(engine.register_user(user, Credential::derive("pw").unwrap()));
        }
        engine
    }

    fn bet_at(author: &str, description: &str, secs: i64) -> Bet {
        Bet::new_at(
            author,
            description,
            "Event",
            Decimal::new(15, 1),
            Decimal::from(5),
            Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        )
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut engine = SocialEngine::new();
        assert!(engine.register_user("alice", Credential::derive("pw1").unwrap()));
        assert!(!engine.register_user("alice", Credential::derive("pw2").unwrap()));
        assert_eq!(engine.user_count(), 1);
        // The first credential must survive the rejected re-registration.
        assert!(engine.login_user("alice", "pw1").is_some());
        assert!(engine.login_user("alice", "pw2").is_none());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut engine = engine_with(&["alice"]);
        assert!(engine.register_user("Alice", Credential::derive("pw").unwrap()));
        assert_eq!(engine.user_count(), 2);
    }

    #[test]
    fn test_login_success_and_failure() {
        let engine = engine_with(&["alice"]);
        let entry = engine.login_user("alice", "pw").unwrap();
        assert_eq!(entry.username(), "alice");
        assert!(engine.login_user("alice", "wrong").is_none());
        assert!(engine.login_user("ghost", "pw").is_none());
    }

    #[test]
    fn test_add_friend_unknown_users_rejected() {
        let mut engine = engine_with(&["alice"]);
        assert!(!engine.add_friend("alice", "ghost"));
        assert!(!engine.add_friend("ghost", "alice"));
        assert!(engine.get_user("alice").unwrap().friends().is_empty());
    }

    #[test]
    fn test_add_friend_self_is_noop() {
        let mut engine = engine_with(&["alice"]);
        assert!(engine.add_friend("alice", "alice"));
        assert!(engine.get_user("alice").unwrap().friends().is_empty());
    }

    #[test]
    fn test_add_friend_idempotent_and_one_directional() {
        let mut engine = engine_with(&["alice", "bob"]);
        assert!(engine.add_friend("alice", "bob"));
        assert!(engine.add_friend("alice", "bob"));
        assert_eq!(engine.get_user("alice").unwrap().friends(), ["bob"]);
        // No reverse edge.
        assert!(engine.get_user("bob").unwrap().friends().is_empty());
    }

    #[test]
    fn test_post_bet_unknown_user() {
        let mut engine = SocialEngine::new();
        let bet = engine.post_bet("ghost", "x", "y", Decimal::new(18, 1), Decimal::from(10));
        assert!(bet.is_none());
    }

    #[test]
    fn test_feed_empty_cases() {
        let mut engine = engine_with(&["alice", "bob"]);
        // Unregistered user, no friends, and friends without bets all
        // produce an empty feed rather than an error.
        assert!(engine.get_feed("ghost").is_empty());
        assert!(engine.get_feed("alice").is_empty());
        engine.add_friend("alice", "bob");
        assert!(engine.get_feed("alice").is_empty());
    }

    #[test]
    fn test_feed_excludes_own_and_non_friend_bets() {
        let mut engine = engine_with(&["alice", "bob", "carol"]);
        engine.add_friend("alice", "bob");
        engine.post_bet("alice", "own bet", "E1", Decimal::new(15, 1), Decimal::from(5));
        engine.post_bet("bob", "bob bet", "E2", Decimal::new(15, 1), Decimal::from(5));
        engine.post_bet("carol", "carol bet", "E3", Decimal::new(15, 1), Decimal::from(5));

        let feed = engine.get_feed("alice");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].author, "bob");
    }

    #[test]
    fn test_feed_direct_friends_only_not_transitive() {
        let mut engine = engine_with(&["alice", "bob", "carol"]);
        engine.add_friend("alice", "bob");
        engine.add_friend("bob", "carol");
        engine.post_bet("carol", "deep bet", "E", Decimal::new(15, 1), Decimal::from(5));

        // carol is a friend-of-friend, not a direct friend of alice.
        assert!(engine.get_feed("alice").is_empty());
        assert_eq!(engine.get_feed("bob").len(), 1);
    }

    #[test]
    fn test_feed_reverse_chronological() {
        let mut engine = engine_with(&["alice", "bob"]);
        engine.add_friend("alice", "bob");
        let bob = engine.entry_mut("bob").unwrap();
        bob.push_bet(bet_at("bob", "Lakers win", 0));
        bob.push_bet(bet_at("bob", "Packers win", 60));

        let feed = engine.get_feed("alice");
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].description, "Packers win");
        assert_eq!(feed[1].description, "Lakers win");
    }

    #[test]
    fn test_feed_interleaves_friends_by_timestamp() {
        let mut engine = engine_with(&["alice", "bob", "carol"]);
        engine.add_friend("alice", "bob");
        engine.add_friend("alice", "carol");
        engine.entry_mut("bob").unwrap().push_bet(bet_at("bob", "b1", 10));
        engine.entry_mut("bob").unwrap().push_bet(bet_at("bob", "b2", 30));
        engine.entry_mut("carol").unwrap().push_bet(bet_at("carol", "c1", 20));

        let feed = engine.get_feed("alice");
        let order: Vec<&str> = feed.iter().map(|b| b.description.as_str()).collect();
        assert_eq!(order, ["b2", "c1", "b1"]);
    }

    #[test]
    fn test_feed_stable_on_equal_timestamps() {
        let mut engine = engine_with(&["alice", "bob", "carol"]);
        // carol first in alice's friend list, bob second.
        engine.add_friend("alice", "carol");
        engine.add_friend("alice", "bob");
        engine.entry_mut("carol").unwrap().push_bet(bet_at("carol", "c1", 0));
        engine.entry_mut("bob").unwrap().push_bet(bet_at("bob", "b1", 0));
        engine.entry_mut("bob").unwrap().push_bet(bet_at("bob", "b2", 0));

        // All timestamps equal: the stable sort must preserve friend-list
        // traversal order, then authored order within a friend.
        let feed = engine.get_feed("alice");
        let order: Vec<&str> = feed.iter().map(|b| b.description.as_str()).collect();
        assert_eq!(order, ["c1", "b1", "b2"]);
    }

    #[test]
    fn test_feed_skips_dangling_friend_silently() {
        let mut engine = engine_with(&["alice", "bob"]);
        engine.add_friend("alice", "bob");
        engine.post_bet("bob", "real", "E", Decimal::new(15, 1), Decimal::from(5));
        // Simulate a friend that no longer resolves in the registry.
        engine.entry_mut("alice").unwrap().add_friend("ghost");

        let feed = engine.get_feed("alice");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].author, "bob");
    }

    #[test]
    fn test_scenario_register_follow_post_feed() {
        let mut engine = SocialEngine::new();
        assert!(engine.register_user("alice", Credential::derive("pw1").unwrap()));
        assert!(engine.register_user("bob", Credential::derive("pw2").unwrap()));
        assert!(engine.add_friend("alice", "bob"));

        engine.entry_mut("bob").unwrap().push_bet(Bet::new_at(
            "bob",
            "Lakers win",
            "NBA Finals",
            Decimal::new(18, 1),
            Decimal::from(10),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        ));
        engine.entry_mut("bob").unwrap().push_bet(Bet::new_at(
            "bob",
            "Packers win",
            "NFL",
            Decimal::new(21, 1),
            Decimal::from(20),
            Utc.timestamp_opt(1_700_000_100, 0).unwrap(),
        ));

        let feed = engine.get_feed("alice");
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].event, "NFL");
        assert_eq!(feed[1].event, "NBA Finals");
    }

    #[test]
    fn test_usernames_listing_sorted() {
        let engine = engine_with(&["carol", "alice", "bob"]);
        assert_eq!(engine.usernames(), ["alice", "bob", "carol"]);
    }
}
