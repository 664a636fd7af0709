use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local identity record, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub created: DateTime<Utc>,
}

impl User {
    pub fn new(id: u64, email: String, name: String) -> Self {
        Self {
            id,
            email,
            name,
            created: Utc::now(),
        }
    }
}
