//! Test fixtures: a minimal PDF and multipart forms.

use axum_test::multipart::{MultipartForm, Part};

/// Minimal valid PDF.
pub fn create_test_pdf() -> Vec<u8> {
    b"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
2 0 obj
<< /Type /Pages /Kids [] /Count 0 >>
endobj
trailer
<< /Size 3 /Root 1 0 R >>
%%EOF
"
    .to_vec()
}

/// Multipart form with one file in `field`.
pub fn file_form(field: &str, file_name: &str, mime_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        field.to_string(),
        Part::bytes(data).file_name(file_name).mime_type(mime_type),
    )
}

/// Multipart form with a PDF in the `pdf` field.
pub fn pdf_form(file_name: &str) -> MultipartForm {
    file_form("pdf", file_name, "application/pdf", create_test_pdf())
}
