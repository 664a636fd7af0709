use crate::{ConnectMethod, CoreError};

use std::str::FromStr;

#[test]
fn test_connect_method_as_str() {
    assert_eq!(ConnectMethod::Credentials.as_str(), "credentials");
    assert_eq!(ConnectMethod::Cookies.as_str(), "cookies");
}

#[test]
fn test_connect_method_from_str() {
    assert_eq!(
        ConnectMethod::from_str("credentials").unwrap(),
        ConnectMethod::Credentials
    );
    assert_eq!(
        ConnectMethod::from_str("cookies").unwrap(),
        ConnectMethod::Cookies
    );
}

#[test]
fn test_connect_method_from_str_is_case_sensitive() {
    assert!(ConnectMethod::from_str("Cookies").is_err());
    assert!(ConnectMethod::from_str("CREDENTIALS").is_err());
    assert!(ConnectMethod::from_str("").is_err());
}

#[test]
fn test_connect_method_invalid_value_is_reported() {
    let err = ConnectMethod::from_str("oauth").unwrap_err();
    match err {
        CoreError::InvalidConnectMethod { value, .. } => assert_eq!(value, "oauth"),
    }
}

#[test]
fn test_connect_method_display_matches_wire_value() {
    assert_eq!(ConnectMethod::Cookies.to_string(), "cookies");
}
