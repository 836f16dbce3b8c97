pub mod bet;
pub mod user;

pub use bet::Bet;
pub use user::{Credential, CredentialError, UserEntry};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BetStatus
// ---------------------------------------------------------------------------

/// Settlement state of a wager. This backend only ever assigns `Pending`;
/// the remaining variants exist so a settlement layer can transition bets
/// without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Void,
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetStatus::Pending => write!(f, "pending"),
            BetStatus::Won => write!(f, "won"),
            BetStatus::Lost => write!(f, "lost"),
            BetStatus::Void => write!(f, "void"),
        }
    }
}
