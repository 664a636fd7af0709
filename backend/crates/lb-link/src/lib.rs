//! Translation layer between the connect endpoint and the account-linking API.
//!
//! Validates inbound connect requests, builds the external payload, performs
//! the call and classifies the outcome.

pub mod connect_request;
pub mod credential;
pub mod error;
pub mod link_client;
pub mod link_response;
pub mod payload;

#[cfg(test)]
mod tests;

pub use connect_request::ConnectRequest;
pub use credential::{Credential, ValidatedConnect};
pub use error::{LinkError, Result as LinkResult};
pub use link_client::LinkClient;
pub use link_response::LinkResponse;
pub use payload::build_payload;
