use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Association between a local user and an externally issued account id.
///
/// At most one row exists per (`user_id`, `account_id`) pair. A repeated link
/// refreshes `email` and `name`; `id` and `created` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub id: u64,
    pub user_id: u64,
    /// Opaque identifier returned by the account-linking API
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub created: DateTime<Utc>,
}

impl LinkedAccount {
    pub fn new(id: u64, user_id: u64, account_id: String, email: String, name: String) -> Self {
        Self {
            id,
            user_id,
            account_id,
            email,
            name,
            created: Utc::now(),
        }
    }

    /// Whether this row is the linkage for the given pair
    pub fn is_link_of(&self, user_id: u64, account_id: &str) -> bool {
        self.user_id == user_id && self.account_id == account_id
    }
}
