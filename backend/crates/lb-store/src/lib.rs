pub mod account_reconciler;
pub mod account_store;
pub mod error;
pub mod link_outcome;
pub mod persistence;
pub mod store_state;


pub use account_reconciler::AccountReconciler;
pub use account_store::AccountStore;
pub use error::{Result, StoreError};
pub use link_outcome::LinkOutcome;
pub use store_state::StoreState;
