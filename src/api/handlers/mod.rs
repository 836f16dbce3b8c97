pub mod auth;
pub mod bets;
pub mod feed;
pub mod friends;
pub mod health;
pub mod metrics;
pub mod search;
pub mod users;
