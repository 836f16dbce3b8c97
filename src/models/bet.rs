use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::BetStatus;

/// One posted wager. Immutable after construction: the timestamp is set
/// once and nothing in this backend transitions `status` past `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    pub author: String,
    pub description: String,
    pub event: String,
    pub odds: Decimal,
    pub stake: Decimal,
    pub status: BetStatus,
    pub created_at: DateTime<Utc>,
}

impl Bet {
    pub fn new(author: &str, description: &str, event: &str, odds: Decimal, stake: Decimal) -> Self {
        Self {
            author: author.to_string(),
            description: description.to_string(),
            event: event.to_string(),
            odds,
            stake,
            status: BetStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Construct with an explicit timestamp. Test-only: feed-ordering
    /// tests need ties and fixed instants.
    #[cfg(test)]
    pub(crate) fn new_at(
        author: &str,
        description: &str,
        event: &str,
        odds: Decimal,
        stake: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            author: author.to_string(),
            description: description.to_string(),
            event: event.to_string(),
            odds,
            stake,
            status: BetStatus::Pending,
            created_at,
        }
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bet '{}' on {} @{} (Stake: {}, Status: {}) [{}]",
            self.author,
            self.description,
            self.event,
            self.odds,
            self.stake,
            self.status,
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
