//! Shared handler state.

use std::sync::Arc;

use sprout_store::StorageBackend;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn StorageBackend>,
}

impl AppState {
    /// Wrap a backend chosen at start-up.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// The storage backend.
    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }
}
