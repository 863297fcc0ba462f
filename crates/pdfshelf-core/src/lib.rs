//! pdfshelf Core Library
//!
//! This crate provides configuration, error types, and domain models shared by the
//! storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{AuthConfig, BaseConfig, Config, StorageSettings};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{KeyStrategy, StoredFile};
