use lb_core::CoreError;

use std::error::Error as StdError;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of a connect attempt, from input validation to the external response
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Request to account-linking API failed: {message} {location}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Account-linking API error (status {status}): {message} {location}")]
    ExternalApi {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Account-linking API key is not configured {location}")]
    MissingApiKey { location: ErrorLocation },
}

impl LinkError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        LinkError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an external API error
    #[track_caller]
    pub fn external_api(status: u16, message: impl Into<String>) -> Self {
        LinkError::ExternalApi {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_api_key() -> Self {
        LinkError::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with its full cause chain
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut cause = err.source();
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }

        LinkError::Transport {
            message,
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LinkError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        LinkError::from_reqwest(err)
    }
}

impl From<CoreError> for LinkError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConnectMethod { .. } => LinkError::validation(
                "method",
                "Method must be either 'credentials' or 'cookies'",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
