//! Storage setup and initialization

use crate::state::StorageHandle;
use pdfshelf_core::Config;
use pdfshelf_storage::create_storage;

/// Build the storage backend.
///
/// Never fails: incomplete settings yield [`StorageHandle::Unavailable`] so the server
/// can start and report the problem per request.
pub fn setup_storage(config: &Config) -> StorageHandle {
    tracing::info!("Initializing storage backend...");
    match create_storage(config.storage()) {
        Ok(storage) => {
            tracing::info!(
                backend = %storage.backend_type(),
                "Storage backend initialized successfully"
            );
            StorageHandle::Ready(storage)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Storage backend unavailable; storage requests will fail until configured"
            );
            StorageHandle::Unavailable(e.to_string())
        }
    }
}
