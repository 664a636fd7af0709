use serde::Serialize;

/// `data` of a successful connect
#[derive(Debug, Serialize)]
pub struct ConnectResponseData {
    pub account_id: String,
    pub user_id: u64,
}
