use std::sync::Arc;

use service::PhoneStore;

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub phones: Arc<PhoneStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self { phones: PhoneStore::new() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
