use std::sync::Arc;

use crate::store::AccountStore;
use crate::transfer::TransferService;

/// Shared gateway application state.
#[derive(Clone)]
pub struct AppState {
    /// Account store (shared with the transfer service)
    pub store: Arc<dyn AccountStore>,
    /// Transfer orchestrator
    pub transfers: Arc<TransferService>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, transfers: Arc<TransferService>) -> Self {
        Self { store, transfers }
    }
}
