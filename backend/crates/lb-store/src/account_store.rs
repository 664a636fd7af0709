use crate::{LinkOutcome, Result as StoreResult, StoreError, StoreState, persistence};

use std::path::{Path, PathBuf};

use lb_core::{LinkedAccount, User};
use log::info;
use tokio::sync::Mutex;

/// Durable mapping of users to their linked external accounts.
///
/// All state sits behind one async mutex. Each operation holds it for the
/// whole lookup, mutation and write, so concurrent handlers never interleave
/// a read-modify-write. Mutations are applied to a copy, persisted, and only
/// then swapped in: a failed write leaves memory identical to disk.
pub struct AccountStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl AccountStore {
    /// Load the store at `path`, or create and persist an empty one.
    pub async fn initialize(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        persistence::ensure_parent_dir(&path).await?;

        let state = match persistence::read_state(&path).await? {
            Some(state) => {
                info!(
                    "Store loaded from {} with {} users and {} linked accounts",
                    path.display(),
                    state.users.len(),
                    state.linked_accounts.len()
                );
                state
            }
            None => {
                let state = StoreState::default();
                persistence::write_state(&path, &state)
                    .await
                    .map_err(|e| StoreError::initialization(path.clone(), e.to_string()))?;
                info!("Created empty store at {}", path.display());
                state
            }
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the user with this email, creating it if absent.
    ///
    /// An existing user is returned as stored; `name` is only used on creation.
    pub async fn get_or_create_user(&self, email: &str, name: &str) -> StoreResult<User> {
        let mut state = self.state.lock().await;

        if let Some(user) = state.find_user_by_email(email) {
            return Ok(user.clone());
        }

        let mut next = state.clone();
        let user = next.insert_user(email, name);
        persistence::write_state(&self.path, &next).await?;
        *state = next;

        info!("Created new user {} ({})", user.id, email);
        Ok(user)
    }

    /// Create or refresh the linkage for (`user_id`, `account_id`).
    pub async fn upsert_linked_account(
        &self,
        user_id: u64,
        account_id: &str,
        email: &str,
        name: &str,
    ) -> StoreResult<LinkOutcome> {
        let mut state = self.state.lock().await;

        let mut next = state.clone();
        let outcome = next.upsert_linked_account(user_id, account_id, email, name);
        persistence::write_state(&self.path, &next).await?;
        *state = next;

        Ok(outcome)
    }

    /// Linked accounts of the user with this email. Unknown email yields an empty list.
    pub async fn list_linked_accounts(&self, email: &str) -> Vec<LinkedAccount> {
        self.state.lock().await.accounts_for_email(email)
    }

    /// Ids of users already linked to `account_id`
    pub async fn owners_of(&self, account_id: &str) -> Vec<u64> {
        self.state.lock().await.owners_of(account_id)
    }

    /// Independent copy of the full state
    pub async fn snapshot(&self) -> StoreState {
        self.state.lock().await.clone()
    }
}
