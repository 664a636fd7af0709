//! Account linking REST API handlers

use crate::{
    ApiError, ApiResponse, ApiResult, AppState, ConnectResponseData, LinkedAccountDto,
};

use lb_link::ConnectRequest;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, header::USER_AGENT},
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/linkedin/connect
///
/// Validate the request, resolve the local user, ask the account-linking API
/// to connect the LinkedIn account, then record the linkage. The user is kept
/// even when the external call fails.
pub async fn connect_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ConnectRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<ConnectResponseData>>> {
    let Json(request) = payload?;
    let connect = request.validate()?;

    info!(
        "Connect request: method={} email={}",
        connect.method(),
        connect.email
    );

    let user = state
        .store
        .get_or_create_user(&connect.email, &connect.name)
        .await
        .map_err(|e| ApiError::persistence("Failed to create/get user", e))?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok());

    let account_id = state
        .link_client
        .connect(&connect.credential, user_agent)
        .await?;

    let outcome = state
        .reconciler
        .reconcile(&user, &account_id, &connect.email, &connect.name)
        .await
        .map_err(|e| ApiError::persistence("Failed to save account", e))?;

    let account = outcome.into_account();

    Ok(Json(ApiResponse::ok(
        "LinkedIn account connected successfully",
        ConnectResponseData {
            account_id: account.account_id,
            user_id: user.id,
        },
    )))
}

/// GET /api/accounts/{email}
///
/// List the accounts linked to the user with this email; unknown emails yield an empty list
pub async fn list_accounts(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<LinkedAccountDto>>>> {
    if email.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Email parameter is required".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let accounts = state.store.list_linked_accounts(&email).await;

    Ok(Json(ApiResponse::ok(
        format!("Found {} linked accounts", accounts.len()),
        accounts.into_iter().map(LinkedAccountDto::from).collect(),
    )))
}
