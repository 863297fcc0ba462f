//! OpenAPI documentation for the JSON endpoints.
//!
//! The HTML pages and the login flow are not described here.

use axum::Json;
use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use pdfshelf_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PDF Shelf API",
        version = "0.1.0",
        description = "Password-protected PDF storage on an S3-compatible bucket. Every endpoint except /health requires the session cookie issued by POST /login."
    ),
    paths(
        handlers::upload::upload_pdf,
        handlers::files::list_files,
        handlers::delete::delete_file,
        handlers::health::health,
    ),
    components(schemas(
        models::StoredFile,
        handlers::upload::UploadResponse,
        handlers::files::FileListResponse,
        handlers::health::HealthResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "files", description = "Upload, list and delete PDFs"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
