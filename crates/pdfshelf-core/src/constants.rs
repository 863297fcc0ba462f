//! Constants shared across crates.

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE_NAME: &str = "session";

/// The only content type accepted by the upload workflow.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Key suffix (compared case-insensitively) that marks a key as downloadable PDF.
pub const PDF_SUFFIX: &str = ".pdf";

/// Returns true when `key` ends in `.pdf`, ignoring ASCII case.
pub fn is_pdf_key(key: &str) -> bool {
    key.len() >= PDF_SUFFIX.len()
        && key.is_char_boundary(key.len() - PDF_SUFFIX.len())
        && key[key.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}
