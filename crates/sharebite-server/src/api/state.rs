use std::sync::Arc;

use crate::store::StoreTable;

/// Application state shared across all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreTable>,
}

impl AppState {
    pub fn new(store: Arc<StoreTable>) -> Self {
        Self { store }
    }
}
