//! Service status checks

use std::sync::Arc;

use crate::repository::Storage;

#[derive(Clone)]
pub struct SystemService {
    storage: Arc<dyn Storage>,
}

impl SystemService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Whether the storage backend answers a ping
    pub async fn database_available(&self) -> bool {
        match self.storage.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                false
            }
        }
    }
}
