use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXTERNAL_API_TIMEOUT_SECS, DEFAULT_EXTERNAL_API_URL,
    MAX_EXTERNAL_API_TIMEOUT_SECS, MIN_EXTERNAL_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Account-linking API endpoint and credentials
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ExternalApiConfig {
    pub base_url: String,
    /// Sent as `X-API-KEY`. Connect attempts fail while unset.
    pub api_key: Option<String>,
    /// Upper bound for a single outbound connect call
    pub timeout_secs: u64,
}

impl Default for ExternalApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_EXTERNAL_API_URL),
            api_key: None,
            timeout_secs: DEFAULT_EXTERNAL_API_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ExternalApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ExternalApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::external_api(format!(
                "external_api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_EXTERNAL_API_TIMEOUT_SECS
            || self.timeout_secs > MAX_EXTERNAL_API_TIMEOUT_SECS
        {
            return Err(ConfigError::external_api(format!(
                "external_api.timeout_secs must be {}-{}, got {}",
                MIN_EXTERNAL_API_TIMEOUT_SECS, MAX_EXTERNAL_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Whether a non-blank API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
