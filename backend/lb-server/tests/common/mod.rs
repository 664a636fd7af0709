#![allow(dead_code)]

//! Test infrastructure for lb-server API tests

use lb_link::LinkClient;
use lb_server::AppState;
use lb_store::AccountStore;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-key";

/// Create AppState backed by a temp store and a link client aimed at `api_url`
pub async fn create_test_app_state(api_url: &str, api_key: Option<&str>) -> (TempDir, AppState) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = AccountStore::initialize(temp.path().join("database.json"))
        .await
        .expect("Failed to initialize store");

    let link_client = LinkClient::new(api_url, api_key, Duration::from_secs(5))
        .expect("Failed to create link client");

    (temp, AppState::new(Arc::new(store), link_client))
}

/// POST a raw JSON body to the connect endpoint
pub async fn post_connect(app: Router, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/linkedin/connect")
        .header("content-type", "application/json")
        .header("user-agent", "TestAgent/1.0")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// GET a path from the router
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
