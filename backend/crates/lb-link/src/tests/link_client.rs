use crate::{LinkClient, LinkError};

use std::time::Duration;

use googletest::prelude::*;
use reqwest::StatusCode;

fn external_status(err: LinkError) -> (u16, String) {
    match err {
        LinkError::ExternalApi {
            status, message, ..
        } => (status, message),
        other => panic!("expected external API error, got {other:?}"),
    }
}

#[test]
fn test_classify_success_returns_account_id() {
    let result = LinkClient::classify_response(StatusCode::OK, r#"{"account_id":"ext-1"}"#);

    assert_that!(result, ok(eq("ext-1")));
}

#[test]
fn test_classify_any_2xx_is_success() {
    let result = LinkClient::classify_response(StatusCode::CREATED, r#"{"account_id":"ext-2"}"#);

    assert_that!(result, ok(eq("ext-2")));
}

#[test]
fn test_classify_error_field_is_used_as_message() {
    let err = LinkClient::classify_response(
        StatusCode::UNAUTHORIZED,
        r#"{"error":"invalid token"}"#,
    )
    .unwrap_err();

    let (status, message) = external_status(err);
    assert_that!(status, eq(401));
    assert_that!(message.as_str(), eq("invalid token"));
}

#[test]
fn test_classify_non_json_error_body_is_echoed() {
    let err =
        LinkClient::classify_response(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();

    let (status, message) = external_status(err);
    assert_that!(status, eq(502));
    assert_that!(message.as_str(), eq("upstream down"));
}

#[test]
fn test_classify_long_error_body_is_kept_whole() {
    let body = "x".repeat(1_000);

    let err = LinkClient::classify_response(StatusCode::SERVICE_UNAVAILABLE, &body).unwrap_err();

    let (status, message) = external_status(err);
    assert_that!(status, eq(503));
    assert_that!(message.len(), eq(1_000));
}

#[test]
fn test_classify_empty_error_body_uses_reason_phrase() {
    let err = LinkClient::classify_response(StatusCode::FORBIDDEN, "").unwrap_err();

    let (_, message) = external_status(err);
    assert_that!(message.as_str(), eq("Forbidden"));
}

#[test]
fn test_classify_success_without_account_id_is_error() {
    let err = LinkClient::classify_response(StatusCode::OK, r#"{"message":"ok"}"#).unwrap_err();

    let (status, message) = external_status(err);
    assert_that!(status, eq(200));
    assert!(message.starts_with("missing account id in response"));
}

#[test]
fn test_classify_success_with_empty_account_id_is_error() {
    let result = LinkClient::classify_response(StatusCode::OK, r#"{"account_id":""}"#);

    assert_that!(result, err(anything()));
}

#[test]
fn test_classify_unparseable_success_body_is_error() {
    let result = LinkClient::classify_response(StatusCode::OK, "<html>");

    assert_that!(result, err(anything()));
}

#[test]
fn test_new_trims_trailing_slash_and_blank_key() {
    let client = LinkClient::new("http://localhost:1/v1/", Some(""), Duration::from_secs(5))
        .unwrap();

    assert_that!(client.base_url(), eq("http://localhost:1/v1"));
    assert_that!(client.has_api_key(), eq(false));
}
