use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /api/health - Liveness plus store counts
pub async fn health_check(State(state): State<AppState>) -> Response {
    let snapshot = state.store.snapshot().await;

    let health = json!({
        "status": "OK",
        "message": "Server is running",
        "version": env!("CARGO_PKG_VERSION"),
        "users": snapshot.users.len(),
        "linked_accounts": snapshot.linked_accounts.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
