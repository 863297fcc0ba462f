use crate::error::{ErrorResponse, HttpAppError};
use crate::services::listing::list_files as list_bucket;
use crate::state::AppState;
use axum::{extract::State, Json};
use pdfshelf_core::StoredFile;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<StoredFile>,
}

#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    responses(
        (status = 200, description = "Every key in the bucket; PDFs carry a presigned URL", body = FileListResponse),
        (status = 302, description = "No valid session, redirect to /login"),
        (status = 500, description = "Storage failure or missing storage configuration", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FileListResponse>, HttpAppError> {
    let storage = state.storage()?;
    let files = list_bucket(storage.as_ref(), state.presigned_url_ttl()).await?;
    Ok(Json(FileListResponse { files }))
}
