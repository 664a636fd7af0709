use serde::Deserialize;

/// Response body of `POST {base}/accounts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkResponse {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LinkResponse {
    /// The account id, if present and non-empty
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// The structured error message, if present and non-empty
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}
