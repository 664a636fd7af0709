use crate::{AccountStore, LinkOutcome, Result as StoreResult};

use std::sync::Arc;

use lb_core::User;
use log::{info, warn};

/// Applies the one-row-per-(user, external account) policy after a successful connect.
#[derive(Clone)]
pub struct AccountReconciler {
    store: Arc<AccountStore>,
}

impl AccountReconciler {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    /// Record that `user` now owns `account_id`, with the latest email/name snapshot.
    ///
    /// The same external id may be linked under several local users; this is
    /// logged but not rejected.
    pub async fn reconcile(
        &self,
        user: &User,
        account_id: &str,
        email: &str,
        name: &str,
    ) -> StoreResult<LinkOutcome> {
        let other_owners: Vec<u64> = self
            .store
            .owners_of(account_id)
            .await
            .into_iter()
            .filter(|owner| *owner != user.id)
            .collect();

        if !other_owners.is_empty() {
            warn!(
                "External account {} is also linked to users {:?}; linking to user {} as well",
                account_id, other_owners, user.id
            );
        }

        let outcome = self
            .store
            .upsert_linked_account(user.id, account_id, email, name)
            .await?;

        match &outcome {
            LinkOutcome::Created(account) => info!(
                "Linked external account {} to user {} (link {})",
                account_id, user.id, account.id
            ),
            LinkOutcome::Updated(account) => info!(
                "Refreshed link {} between user {} and external account {}",
                account.id, user.id, account_id
            ),
        }

        Ok(outcome)
    }
}
