//! REST API error types
//!
//! Every failure renders as `{success: false, error, code}` with the HTTP
//! status the variant maps to.

use lb_link::LinkError;
use lb_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// The account-linking API refused or could not be reached (400).
    /// `status` is the upstream HTTP status, absent for transport failures.
    #[error("LinkedIn connection failed: {message} (upstream status: {status:?}) {location}")]
    ExternalApi {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },

    /// Server is missing required configuration (500)
    #[error("Configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    /// Store could not be written (500)
    /// `detail` is the full store error for the log; never sent to clients.
    #[error("Persistence error: {message} [{detail}] {location}")]
    Persistence {
        message: String,
        detail: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Store failure with a description of the step that failed
    #[track_caller]
    pub fn persistence(context: &str, err: StoreError) -> Self {
        ApiError::Persistence {
            message: format!("{context}: {}", store_error_summary(&err)),
            detail: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. }
            | ApiError::BadRequest { .. }
            | ApiError::ExternalApi { .. } => StatusCode::BAD_REQUEST,
            ApiError::Configuration { .. }
            | ApiError::Persistence { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::ExternalApi { .. } => "EXTERNAL_API_ERROR",
            ApiError::Configuration { .. } => "CONFIGURATION_ERROR",
            ApiError::Persistence { .. } => "PERSISTENCE_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if self.status().is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let status = self.status();
        let code = self.code().to_string();

        let (error, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::ExternalApi {
                message,
                status: Some(upstream),
                ..
            } => (
                format!("LinkedIn connection failed: status {upstream}: {message}"),
                None,
            ),
            ApiError::ExternalApi { message, .. } => {
                (format!("LinkedIn connection failed: {message}"), None)
            }
            ApiError::BadRequest { message, .. }
            | ApiError::Configuration { message, .. }
            | ApiError::Persistence { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            success: false,
            error,
            code,
            field,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert connect failures to API errors
impl From<LinkError> for ApiError {
    #[track_caller]
    fn from(e: LinkError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            LinkError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            LinkError::ExternalApi {
                status, message, ..
            } => ApiError::ExternalApi {
                message,
                status: Some(status),
                location,
            },
            LinkError::Transport { message, .. } => ApiError::ExternalApi {
                message,
                status: None,
                location,
            },
            LinkError::MissingApiKey { .. } => ApiError::Configuration {
                message: "UNIPILE_API_KEY environment variable is not set".to_string(),
                location,
            },
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::persistence("Store operation failed", e)
    }
}

/// Convert JSON body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid request format: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// Don't expose file paths to clients
fn store_error_summary(err: &StoreError) -> String {
    match err {
        StoreError::Persistence { source, .. } => source.to_string(),
        StoreError::Serialization { source, .. } => source.to_string(),
        StoreError::Initialization { message, .. } => message.clone(),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
