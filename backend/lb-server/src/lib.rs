pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{connect_account, list_accounts},
        connect_response_data::ConnectResponseData,
        linked_account_dto::LinkedAccountDto,
    },
    api_response::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
