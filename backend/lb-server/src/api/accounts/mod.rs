#[allow(clippy::module_inception)]
pub mod accounts;
pub mod connect_response_data;
pub mod linked_account_dto;
