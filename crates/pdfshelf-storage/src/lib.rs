//! PDF Shelf Storage Library
//!
//! This crate provides the object storage facade used by the HTTP layer, an S3
//! implementation that works against Cloudflare R2, and an in-memory backend for
//! tests.
//!
//! # Storage key format
//!
//! Keys are flat, with no directory prefix. Depending on the configured
//! [`KeyStrategy`](pdfshelf_core::KeyStrategy) a key is either the sanitized upload
//! name or `{uuid}_{sanitized name}`. Key generation is centralized in the `keys`
//! module.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-memory")]
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{derive_storage_key, sanitize_filename};
#[cfg(feature = "storage-memory")]
pub use memory::{MemoryStorage, StorageCall};
#[cfg(feature = "storage-s3")]
pub use s3::{S3Settings, S3Storage};
pub use traits::{Storage, StorageBackend, StorageError, StorageResult};
