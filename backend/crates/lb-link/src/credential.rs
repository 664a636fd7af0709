use lb_core::ConnectMethod;

/// Proof of ownership for the external account, after validation
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Password {
        username: String,
        password: String,
        verification_code: Option<String>,
    },
    SessionCookie {
        value: String,
    },
}

impl Credential {
    pub fn method(&self) -> ConnectMethod {
        match self {
            Self::Password { .. } => ConnectMethod::Credentials,
            Self::SessionCookie { .. } => ConnectMethod::Cookies,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Password {
                username,
                verification_code,
                ..
            } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .field(
                    "verification_code",
                    &verification_code.as_ref().map(|_| "<redacted>"),
                )
                .finish(),
            Self::SessionCookie { .. } => f
                .debug_struct("SessionCookie")
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}

/// A connect request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConnect {
    pub email: String,
    pub name: String,
    pub credential: Credential,
}

impl ValidatedConnect {
    pub fn method(&self) -> ConnectMethod {
        self.credential.method()
    }
}
