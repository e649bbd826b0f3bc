use std::sync::Arc;

use minitube_core::VideoStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn VideoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn VideoStore {
        self.store.as_ref()
    }
}
