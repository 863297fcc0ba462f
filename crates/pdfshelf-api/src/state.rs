//! Application state shared by every handler.
//!
//! Built once at startup and never mutated afterwards.

use crate::auth::SessionAuth;
use pdfshelf_core::{AppError, Config};
use pdfshelf_storage::Storage;
use std::sync::Arc;
use std::time::Duration;

/// Storage backend, or the reason it could not be built.
///
/// Missing storage configuration does not stop the server; each request that needs
/// storage gets a configuration error instead.
#[derive(Clone)]
pub enum StorageHandle {
    Ready(Arc<dyn Storage>),
    Unavailable(String),
}

impl StorageHandle {
    pub fn get(&self) -> Result<Arc<dyn Storage>, AppError> {
        match self {
            StorageHandle::Ready(storage) => Ok(storage.clone()),
            StorageHandle::Unavailable(reason) => Err(AppError::Configuration(reason.clone())),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StorageHandle::Ready(_))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: StorageHandle,
    pub auth: Arc<SessionAuth>,
}

impl AppState {
    pub fn new(config: Config, storage: StorageHandle, auth: SessionAuth) -> Self {
        Self {
            config,
            storage,
            auth: Arc::new(auth),
        }
    }

    pub fn storage(&self) -> Result<Arc<dyn Storage>, AppError> {
        self.storage.get()
    }

    pub fn presigned_url_ttl(&self) -> Duration {
        Duration::from_secs(self.config.presigned_url_ttl_secs())
    }
}
