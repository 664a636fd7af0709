use crate::{Credential, LinkError, LinkResult, ValidatedConnect};

use lb_core::ConnectMethod;

use serde::Deserialize;

/// Body of `POST /api/linkedin/connect`.
///
/// Every field is optional at the JSON level so that missing values surface
/// as validation errors naming the field rather than as parse failures.
#[derive(Clone, Default, Deserialize)]
pub struct ConnectRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// "credentials" or "cookies"
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub cookies: Option<String>,
    #[serde(default, rename = "verificationCode")]
    pub verification_code: Option<String>,
}

impl ConnectRequest {
    /// Check required fields for the selected method and produce a typed credential.
    pub fn validate(self) -> LinkResult<ValidatedConnect> {
        if self.email.trim().is_empty() {
            return Err(LinkError::validation("email", "Email is required"));
        }

        if self.name.trim().is_empty() {
            return Err(LinkError::validation("name", "Name is required"));
        }

        let method: ConnectMethod = self.method.parse()?;

        let credential = match method {
            ConnectMethod::Credentials => {
                let username = non_empty(self.username);
                let password = non_empty(self.password);

                match (username, password) {
                    (Some(username), Some(password)) => Credential::Password {
                        username,
                        password,
                        verification_code: non_empty(self.verification_code),
                    },
                    (None, _) => {
                        return Err(LinkError::validation(
                            "username",
                            "Username and password are required for credentials method",
                        ));
                    }
                    (_, None) => {
                        return Err(LinkError::validation(
                            "password",
                            "Username and password are required for credentials method",
                        ));
                    }
                }
            }
            ConnectMethod::Cookies => match non_empty(self.cookies) {
                Some(value) => Credential::SessionCookie { value },
                None => {
                    return Err(LinkError::validation(
                        "cookies",
                        "Cookies are required for cookies method",
                    ));
                }
            },
        };

        Ok(ValidatedConnect {
            email: self.email,
            name: self.name,
            credential,
        })
    }
}

impl std::fmt::Debug for ConnectRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("method", &self.method)
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .field("has_cookies", &self.cookies.is_some())
            .field("has_verification_code", &self.verification_code.is_some())
            .finish()
    }
}

// Secrets and login names are passed through verbatim; only "" counts as missing
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
