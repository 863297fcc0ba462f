//! Listing workflow: every key in the bucket, with download URLs for PDFs.

use futures::future::join_all;
use pdfshelf_core::constants::is_pdf_key;
use pdfshelf_core::StoredFile;
use pdfshelf_storage::{Storage, StorageError};
use std::time::Duration;

/// List the bucket and sign a download URL for every `.pdf` key.
///
/// Signatures are requested concurrently. A failure for one key is logged and leaves that
/// entry without a URL; the others are unaffected. The result keeps the listing order.
pub async fn list_files(
    storage: &dyn Storage,
    url_ttl: Duration,
) -> Result<Vec<StoredFile>, StorageError> {
    let keys = storage.list().await?;
    let total = keys.len();

    let files = join_all(keys.into_iter().map(|key| async move {
        if !is_pdf_key(&key) {
            return StoredFile::new(key, None);
        }
        match storage.presigned_get_url(&key, url_ttl).await {
            Ok(url) => StoredFile::new(key, Some(url)),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to sign download URL");
                StoredFile::new(key, None)
            }
        }
    }))
    .await;

    tracing::debug!(
        total,
        signed = files.iter().filter(|f| f.url.is_some()).count(),
        "Listed bucket"
    );

    Ok(files)
}
