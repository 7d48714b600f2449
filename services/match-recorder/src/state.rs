use crate::store::MatchStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<MatchStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state around an existing store, so callers can inspect it.
    pub fn with_store(store: Arc<MatchStore>) -> Self {
        Self { store }
    }
}
