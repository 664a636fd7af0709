pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::connect_method::ConnectMethod;
pub use models::linked_account::LinkedAccount;
pub use models::user::User;
