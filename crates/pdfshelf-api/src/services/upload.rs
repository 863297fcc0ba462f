//! PDF upload workflow: validate, derive the key, store, sign.

use crate::utils::upload::{normalize_mime_type, validate_file_size, MultipartFile};
use bytes::Bytes;
use pdfshelf_core::constants::PDF_CONTENT_TYPE;
use pdfshelf_core::{AppError, Config, KeyStrategy, StoredFile};
use pdfshelf_storage::{derive_storage_key, Storage};
use std::time::Duration;

const NO_FILE_MESSAGE: &str = "No valid PDF file provided.";
const NOT_PDF_MESSAGE: &str = "Only PDF files are allowed.";

#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    pub key_strategy: KeyStrategy,
    pub max_file_size: usize,
    pub url_ttl: Duration,
}

impl UploadOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            key_strategy: config.key_strategy(),
            max_file_size: config.max_upload_size_bytes(),
            url_ttl: Duration::from_secs(config.presigned_url_ttl_secs()),
        }
    }
}

/// Check presence, content type and size, in that order.
///
/// Returns the client file name and the file contents.
fn validate_upload(
    file: Option<MultipartFile>,
    max_file_size: usize,
) -> Result<(String, Bytes), AppError> {
    let file = file.ok_or_else(|| AppError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;
    let filename = file
        .filename
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| AppError::InvalidInput(NO_FILE_MESSAGE.to_string()))?;

    let content_type = file
        .content_type
        .as_deref()
        .map(normalize_mime_type)
        .unwrap_or_default();
    if content_type != PDF_CONTENT_TYPE {
        return Err(AppError::InvalidInput(NOT_PDF_MESSAGE.to_string()));
    }

    validate_file_size(file.data.len(), max_file_size)?;

    Ok((filename, file.data))
}

/// Store an uploaded PDF and return its key with a presigned download URL.
///
/// Nothing is written when validation fails. A signing failure after a successful put is
/// logged and the URL is omitted, since the object is already stored.
pub async fn upload_pdf(
    storage: &dyn Storage,
    file: Option<MultipartFile>,
    options: &UploadOptions,
) -> Result<StoredFile, AppError> {
    let (filename, data) = validate_upload(file, options.max_file_size)?;
    let key = derive_storage_key(options.key_strategy, &filename)?;
    let size = data.len();

    storage.put(&key, data, PDF_CONTENT_TYPE).await?;

    tracing::info!(
        key = %key,
        size_bytes = size,
        strategy = %options.key_strategy,
        "PDF uploaded"
    );

    let url = match storage.presigned_get_url(&key, options.url_ttl).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::error!(error = %e, key = %key, "Uploaded PDF stored but URL signing failed");
            None
        }
    };

    Ok(StoredFile::new(key, url))
}
