//! Storage key derivation for uploaded files.
//!
//! Keys are derived from the uploaded file name with a [`KeyStrategy`]. The name is
//! always reduced to its base name and sanitized first, so keys never contain path
//! separators or characters outside `[A-Za-z0-9._-]`.

use crate::{StorageError, StorageResult};
use pdfshelf_core::KeyStrategy;
use uuid::Uuid;

const MAX_FILENAME_LENGTH: usize = 200;
/// Longest suffix (dot included) kept intact when a name is truncated.
const MAX_EXTENSION_LENGTH: usize = 16;

/// Sanitize a client-supplied file name.
///
/// Returns an error if the base name is `.` or `..`. Dots inside a name such as
/// `draft..final.pdf` are kept.
pub fn sanitize_filename(filename: &str) -> StorageResult<String> {
    // Browsers on Windows may send full paths with backslashes.
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    if base == "." || base == ".." {
        return Err(StorageError::InvalidKey(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(|c| c == '_' || c == '.').is_empty() {
        return Ok("file.pdf".to_string());
    }

    Ok(truncate_keeping_extension(sanitized))
}

/// Shorten an ASCII name to `MAX_FILENAME_LENGTH`, cutting the stem so the
/// extension survives.
fn truncate_keeping_extension(name: String) -> String {
    if name.len() <= MAX_FILENAME_LENGTH {
        return name;
    }
    match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot <= MAX_EXTENSION_LENGTH => {
            let extension = &name[dot..];
            format!(
                "{}{}",
                &name[..MAX_FILENAME_LENGTH - extension.len()],
                extension
            )
        }
        _ => name[..MAX_FILENAME_LENGTH].to_string(),
    }
}

/// Derive the storage key for an uploaded file.
pub fn derive_storage_key(strategy: KeyStrategy, filename: &str) -> StorageResult<String> {
    let name = sanitize_filename(filename)?;
    Ok(match strategy {
        KeyStrategy::Original => name,
        KeyStrategy::UuidPrefix => format!("{}_{}", Uuid::new_v4(), name),
    })
}
