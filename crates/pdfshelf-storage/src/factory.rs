#[cfg(feature = "storage-s3")]
use crate::{S3Settings, S3Storage};
use crate::{Storage, StorageError, StorageResult};
use pdfshelf_core::StorageSettings;
use std::sync::Arc;

/// Create the storage backend from configuration.
///
/// Fails with [`StorageError::ConfigError`] naming every missing variable when the
/// settings are incomplete.
pub fn create_storage(settings: &StorageSettings) -> StorageResult<Arc<dyn Storage>> {
    let missing = settings.missing_vars();
    if !missing.is_empty() {
        return Err(StorageError::ConfigError(format!(
            "Missing R2 environment variables: {}",
            missing.join(", ")
        )));
    }

    build_s3(settings)
}

#[cfg(feature = "storage-s3")]
fn build_s3(settings: &StorageSettings) -> StorageResult<Arc<dyn Storage>> {
    let required = |value: &Option<String>, name: &str| {
        value
            .clone()
            .ok_or_else(|| StorageError::ConfigError(format!("{} not configured", name)))
    };

    let endpoint = settings
        .resolved_endpoint()
        .map(String::from)
        .ok_or_else(|| StorageError::ConfigError("R2_ENDPOINT not configured".to_string()))?;

    let storage = S3Storage::new(S3Settings {
        access_key_id: required(&settings.access_key_id, "R2_ACCESS_KEY_ID")?,
        secret_access_key: required(&settings.secret_access_key, "R2_SECRET_ACCESS_KEY")?,
        bucket: required(&settings.bucket, "R2_BUCKET_NAME")?,
        region: settings.region.clone(),
        endpoint,
    })?;

    tracing::info!(
        bucket = settings.bucket.as_deref().unwrap_or_default(),
        region = %settings.region,
        "S3 storage backend initialized"
    );

    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-s3"))]
fn build_s3(_settings: &StorageSettings) -> StorageResult<Arc<dyn Storage>> {
    Err(StorageError::ConfigError(
        "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_are_named_in_the_error() {
        let settings = StorageSettings {
            access_key_id: Some("key".to_string()),
            region: "auto".to_string(),
            ..Default::default()
        };

        let err = create_storage(&settings).err().unwrap();
        let message = err.to_string();
        assert!(matches!(err, StorageError::ConfigError(_)));
        assert!(message.contains("Missing R2 environment variables"));
        assert!(message.contains("R2_SECRET_ACCESS_KEY"));
        assert!(message.contains("R2_BUCKET_NAME"));
        assert!(message.contains("R2_ENDPOINT"));
        assert!(!message.contains("R2_ACCESS_KEY_ID"));
    }

    #[cfg(feature = "storage-s3")]
    #[test]
    fn complete_settings_build_an_s3_backend() {
        let settings = StorageSettings {
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            bucket: Some("pdfs".to_string()),
            endpoint: Some("https://account.r2.cloudflarestorage.com".to_string()),
            custom_domain: None,
            region: "auto".to_string(),
        };

        let storage = create_storage(&settings).unwrap();
        assert_eq!(storage.backend_type(), crate::StorageBackend::S3);
    }
}
