//! Common utilities for the file upload handler

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use pdfshelf_core::AppError;

/// Multipart field names accepted for the uploaded file.
pub const FILE_FIELD_NAMES: [&str; 2] = ["pdf", "file"];

/// A file field read from a multipart form, before any validation.
#[derive(Debug, Clone)]
pub struct MultipartFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Request body too large: {}", e.body_text()))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", e.body_text()))
    }
}

/// Extract the file field (`pdf` or `file`) from a multipart form.
///
/// Other fields are skipped. Returns `Ok(None)` when no file field is present; more than
/// one file field is rejected.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<Option<MultipartFile>, AppError> {
    let mut file: Option<MultipartFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default();
        if !FILE_FIELD_NAMES.contains(&field_name) {
            continue;
        }

        if file.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one PDF".to_string(),
            ));
        }

        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(multipart_error)?;

        file = Some(MultipartFile {
            filename,
            content_type,
            data,
        });
    }

    Ok(file)
}

/// Normalize MIME type by stripping parameters (e.g. "application/pdf; charset=binary" -> "application/pdf").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase()
}

/// Validate file size. Empty files are rejected as well.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    if file_size == 0 {
        return Err(AppError::InvalidInput("Uploaded file is empty.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_mime_type_strips_parameters_and_case() {
        assert_eq!(normalize_mime_type("application/pdf"), "application/pdf");
        assert_eq!(
            normalize_mime_type("Application/PDF; charset=binary"),
            "application/pdf"
        );
        assert_eq!(normalize_mime_type(" text/plain "), "text/plain");
    }

    #[test]
    fn validate_file_size_limits() {
        assert!(validate_file_size(10, 10).is_ok());
        assert!(matches!(
            validate_file_size(11, 10),
            Err(AppError::PayloadTooLarge(_))
        ));
        assert!(matches!(
            validate_file_size(0, 10),
            Err(AppError::InvalidInput(_))
        ));
    }
}
