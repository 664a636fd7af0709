use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How the caller proves ownership of the external account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectMethod {
    /// Username and password, optionally with a verification code
    Credentials,
    /// An existing session cookie
    Cookies,
}

impl ConnectMethod {
    /// Wire representation used by the connect endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credentials => "credentials",
            Self::Cookies => "cookies",
        }
    }
}

impl FromStr for ConnectMethod {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "credentials" => Ok(Self::Credentials),
            "cookies" => Ok(Self::Cookies),
            _ => Err(CoreError::InvalidConnectMethod {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ConnectMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
