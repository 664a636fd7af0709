use lb_core::LinkedAccount;

use serde::Serialize;

/// Linked account DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct LinkedAccountDto {
    pub id: u64,
    pub user_id: u64,
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub created: String,
}

impl From<LinkedAccount> for LinkedAccountDto {
    fn from(a: LinkedAccount) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            account_id: a.account_id,
            email: a.email,
            name: a.name,
            created: a.created.to_rfc3339(),
        }
    }
}
