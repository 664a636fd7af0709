use crate::payload::{build_payload, payload_keys};
use crate::{Credential, LinkError, LinkResponse, LinkResult};

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, StatusCode};

/// Header carrying the account-linking API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Path of the account-creation endpoint, relative to the base URL
pub const ACCOUNTS_PATH: &str = "/accounts";

/// Longest slice of a 2xx body echoed when it lacks an account id
const MAX_BODY_EXCERPT: usize = 200;

/// HTTP client for the account-linking API
pub struct LinkClient {
    base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl LinkClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.unipile.com/v1")
    /// * `api_key` - Key sent in the X-API-KEY header; `None` makes every connect fail
    /// * `timeout` - Upper bound for a whole request
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> LinkResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(LinkError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()).map(String::from),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the external service to link an account and return its id.
    ///
    /// Any 2xx with a non-empty `account_id` is a success. Everything else is
    /// an error; secrets never reach the log.
    pub async fn connect(
        &self,
        credential: &Credential,
        user_agent: Option<&str>,
    ) -> LinkResult<String> {
        let Some(ref api_key) = self.api_key else {
            warn!("Connect attempt rejected: account-linking API key is not configured");
            return Err(LinkError::missing_api_key());
        };

        let payload = build_payload(credential, user_agent);
        let url = format!("{}{}", self.base_url, ACCOUNTS_PATH);

        debug!(
            "POST {} (method: {}, keys: {:?})",
            url,
            credential.method(),
            payload_keys(&payload)
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Account-linking API unreachable: {e}");
                LinkError::from_reqwest(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        let account_id = Self::classify_response(status, &body)?;
        info!(
            "Account-linking API accepted {} connect (status {})",
            credential.method(),
            status.as_u16()
        );

        Ok(account_id)
    }

    /// Turn a status and raw body into an account id or an error
    pub fn classify_response(status: StatusCode, body: &str) -> LinkResult<String> {
        let parsed = serde_json::from_str::<LinkResponse>(body).ok();

        if !status.is_success() {
            let message = parsed
                .as_ref()
                .and_then(|r| r.error().map(String::from))
                .unwrap_or_else(|| fallback_message(status, body));

            warn!(
                "Account-linking API returned {}: {}",
                status.as_u16(),
                message
            );
            return Err(LinkError::external_api(status.as_u16(), message));
        }

        match parsed.as_ref().and_then(LinkResponse::account_id) {
            Some(account_id) => Ok(account_id.to_string()),
            None => {
                warn!(
                    "Account-linking API returned {} without an account id",
                    status.as_u16()
                );
                Err(LinkError::external_api(
                    status.as_u16(),
                    format!("missing account id in response: {}", excerpt(body)),
                ))
            }
        }
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
