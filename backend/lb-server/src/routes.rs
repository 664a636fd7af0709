use crate::{AppState, connect_account, health, list_accounts};

use std::path::Path;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the API router without static file serving
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/linkedin/connect", post(connect_account))
        .route("/api/accounts/{email}", get(list_accounts))
        .route("/api/health", get(health::health_check))
        .with_state(state)
        .layer(cors_layer())
}

/// Build the full application: API routes plus the single-page client in `static_dir`.
///
/// Unknown paths are served from `static_dir`, falling back to its `index.html`.
pub fn build_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let client = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    build_router(state).fallback_service(client)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
