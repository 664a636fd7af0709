use lb_core::LinkedAccount;

/// Result of an upsert: which branch ran and the row as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Created(LinkedAccount),
    Updated(LinkedAccount),
}

impl LinkOutcome {
    pub fn account(&self) -> &LinkedAccount {
        match self {
            Self::Created(account) | Self::Updated(account) => account,
        }
    }

    pub fn into_account(self) -> LinkedAccount {
        match self {
            Self::Created(account) | Self::Updated(account) => account,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
