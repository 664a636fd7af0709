use crate::ApiError;

use lb_link::LinkError;
use lb_store::StoreError;

use std::panic::Location;
use std::path::PathBuf;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn error_text(json: &serde_json::Value) -> &str {
    json["error"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Email is required".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_that!(error_text(&json), eq("Email is required"));
    assert_eq!(json["field"], "email");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let error = ApiError::BadRequest {
        message: "Invalid request format".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_that!(json.get("field"), none());
}

#[tokio::test]
async fn test_external_api_error_carries_upstream_status() {
    let error = ApiError::from(LinkError::external_api(401, "invalid token"));

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["code"], "EXTERNAL_API_ERROR");
    assert_that!(
        error_text(&json),
        eq("LinkedIn connection failed: status 401: invalid token")
    );
}

#[test]
fn test_external_api_error_keeps_status_in_variant() {
    let error = ApiError::from(LinkError::external_api(502, "upstream down"));

    match error {
        ApiError::ExternalApi { status, .. } => assert_that!(status, some(eq(502))),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_has_no_upstream_status() {
    let error = ApiError::ExternalApi {
        message: "connection refused".into(),
        status: None,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(
        error_text(&json),
        eq("LinkedIn connection failed: connection refused")
    );
}

#[tokio::test]
async fn test_link_validation_error_keeps_field() {
    let error = ApiError::from(LinkError::validation(
        "cookies",
        "Cookies are required for cookies method",
    ));

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["field"], "cookies");
    assert_that!(
        error_text(&json),
        eq("Cookies are required for cookies method")
    );
}

#[tokio::test]
async fn test_missing_api_key_is_configuration_error() {
    let error = ApiError::from(LinkError::missing_api_key());

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_store_error_is_500_without_path() {
    let error = ApiError::persistence(
        "Failed to save account",
        StoreError::persistence(
            PathBuf::from("/secret/place/database.json"),
            std::io::Error::other("disk full"),
        ),
    );

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(json["code"], "PERSISTENCE_ERROR");
    assert_that!(error_text(&json), eq("Failed to save account: disk full"));
}

#[test]
fn test_store_error_detail_keeps_path_for_logs() {
    let error = ApiError::persistence(
        "Failed to save account",
        StoreError::persistence(
            PathBuf::from("/data/database.json"),
            std::io::Error::other("disk full"),
        ),
    );

    assert!(error.to_string().contains("/data/database.json"));
}
