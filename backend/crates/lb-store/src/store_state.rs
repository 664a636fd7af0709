//! In-memory shape of the store document.
//!
//! Everything here is synchronous and side-effect free; `AccountStore` owns
//! locking and persistence.

use crate::LinkOutcome;

use std::collections::HashSet;

use lb_core::{LinkedAccount, User};
use serde::{Deserialize, Serialize};

/// Full store contents, serialized as one JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub linked_accounts: Vec<LinkedAccount>,
    pub next_user_id: u64,
    pub next_account_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            linked_accounts: Vec::new(),
            next_user_id: 1,
            next_account_id: 1,
        }
    }
}

impl StoreState {
    /// First user whose email matches exactly (case-sensitive)
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Append a new user with the next id
    pub fn insert_user(&mut self, email: &str, name: &str) -> User {
        let user = User::new(self.next_user_id, email.to_string(), name.to_string());
        self.next_user_id += 1;
        self.users.push(user.clone());
        user
    }

    /// Refresh the row for (`user_id`, `account_id`) or append a new one
    pub fn upsert_linked_account(
        &mut self,
        user_id: u64,
        account_id: &str,
        email: &str,
        name: &str,
    ) -> LinkOutcome {
        if let Some(existing) = self
            .linked_accounts
            .iter_mut()
            .find(|account| account.is_link_of(user_id, account_id))
        {
            existing.email = email.to_string();
            existing.name = name.to_string();
            return LinkOutcome::Updated(existing.clone());
        }

        let account = LinkedAccount::new(
            self.next_account_id,
            user_id,
            account_id.to_string(),
            email.to_string(),
            name.to_string(),
        );
        self.next_account_id += 1;
        self.linked_accounts.push(account.clone());
        LinkOutcome::Created(account)
    }

    /// Linked accounts of the user with this email, in insertion order
    pub fn accounts_for_email(&self, email: &str) -> Vec<LinkedAccount> {
        let Some(user) = self.find_user_by_email(email) else {
            return Vec::new();
        };

        self.linked_accounts
            .iter()
            .filter(|account| account.user_id == user.id)
            .cloned()
            .collect()
    }

    /// Ids of users holding a linkage to `account_id`
    pub fn owners_of(&self, account_id: &str) -> Vec<u64> {
        self.linked_accounts
            .iter()
            .filter(|account| account.account_id == account_id)
            .map(|account| account.user_id)
            .collect()
    }

    /// Describes the first structural problem that would lead to duplicate ids
    pub fn integrity_violation(&self) -> Option<String> {
        if self.next_user_id == 0 || self.next_account_id == 0 {
            return Some("id counters must start at 1".to_string());
        }

        let mut user_ids = HashSet::new();
        for user in &self.users {
            if user.id >= self.next_user_id {
                return Some(format!(
                    "user id {} is not below next_user_id {}",
                    user.id, self.next_user_id
                ));
            }
            if !user_ids.insert(user.id) {
                return Some(format!("duplicate user id {}", user.id));
            }
        }

        let mut account_ids = HashSet::new();
        let mut pairs = HashSet::new();
        for account in &self.linked_accounts {
            if account.id >= self.next_account_id {
                return Some(format!(
                    "linked account id {} is not below next_account_id {}",
                    account.id, self.next_account_id
                ));
            }
            if !account_ids.insert(account.id) {
                return Some(format!("duplicate linked account id {}", account.id));
            }
            if !pairs.insert((account.user_id, account.account_id.as_str())) {
                return Some(format!(
                    "user {} is linked to {} more than once",
                    account.user_id, account.account_id
                ));
            }
        }

        None
    }
}
