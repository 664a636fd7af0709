use lb_link::LinkClient;
use lb_store::{AccountReconciler, AccountStore};

use std::sync::Arc;

/// Shared handles for every request handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AccountStore>,
    pub reconciler: AccountReconciler,
    pub link_client: Arc<LinkClient>,
}

impl AppState {
    pub fn new(store: Arc<AccountStore>, link_client: LinkClient) -> Self {
        Self {
            reconciler: AccountReconciler::new(store.clone()),
            store,
            link_client: Arc::new(link_client),
        }
    }
}
