//! Request body for `POST {base}/accounts`.
//!
//! The accepted shape differs between revisions of the linking API, so the
//! builder sends every key any known revision reads. Mapping, revision 2:
//!
//! | key                                   | credentials                 | cookies              |
//! |---------------------------------------|-----------------------------|----------------------|
//! | `provider`                            | `"LINKEDIN"`                | `"LINKEDIN"`         |
//! | `username`, `password`                | username, password          |                      |
//! | `verification_code`                   | code, if supplied           |                      |
//! | `credentials.{identifier,login,username}` | username                |                      |
//! | `credentials.email`                   | username, if it contains @  |                      |
//! | `credentials.password`                | password                    |                      |
//! | `credentials.verification_code`       | code, if supplied           |                      |
//! | `access_token`, `cookies`             |                             | cookie value         |
//! | `user_agent`                          |                             | caller UA, if known  |
//!
//! Revision 1 sent only `access_token` for cookies and only the top-level
//! fields for credentials.

use crate::Credential;

use serde_json::{Map, Value};

pub const PAYLOAD_REVISION: u32 = 2;

pub const PROVIDER: &str = "LINKEDIN";

/// Keys inside `credentials` that all carry the login name
pub const LOGIN_ALIASES: [&str; 3] = ["identifier", "login", "username"];

/// Extra `credentials` key used when the login name is an email address
pub const EMAIL_ALIAS: &str = "email";

/// Top-level keys that all carry the session cookie
pub const COOKIE_KEYS: [&str; 2] = ["access_token", "cookies"];

/// Build the external payload for a validated credential.
pub fn build_payload(credential: &Credential, user_agent: Option<&str>) -> Value {
    let mut payload = Map::new();
    payload.insert("provider".into(), Value::from(PROVIDER));

    match credential {
        Credential::SessionCookie { value } => {
            for key in COOKIE_KEYS {
                payload.insert(key.into(), Value::from(value.as_str()));
            }
            if let Some(agent) = user_agent.filter(|a| !a.is_empty()) {
                payload.insert("user_agent".into(), Value::from(agent));
            }
        }
        Credential::Password {
            username,
            password,
            verification_code,
        } => {
            payload.insert("username".into(), Value::from(username.as_str()));
            payload.insert("password".into(), Value::from(password.as_str()));

            let mut nested = Map::new();
            for key in LOGIN_ALIASES {
                nested.insert(key.into(), Value::from(username.as_str()));
            }
            if username.contains('@') {
                nested.insert(EMAIL_ALIAS.into(), Value::from(username.as_str()));
            }
            nested.insert("password".into(), Value::from(password.as_str()));

            if let Some(code) = verification_code {
                payload.insert("verification_code".into(), Value::from(code.as_str()));
                nested.insert("verification_code".into(), Value::from(code.as_str()));
            }

            payload.insert("credentials".into(), Value::Object(nested));
        }
    }

    Value::Object(payload)
}

/// Top-level key names of a payload, for logging without values
pub fn payload_keys(payload: &Value) -> Vec<&str> {
    payload
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
