use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::{upload_pdf as store_pdf, UploadOptions};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use pdfshelf_core::{AppError, StoredFile};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub file: StoredFile,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "files",
    request_body(
        content_type = "multipart/form-data",
        description = "Multipart form with a single PDF in the `pdf` (or `file`) field"
    ),
    responses(
        (status = 200, description = "PDF stored", body = UploadResponse),
        (status = 302, description = "No valid session, redirect to /login"),
        (status = 400, description = "Missing file or not a PDF", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage failure or missing storage configuration", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_pdf"))]
pub async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let storage = state.storage()?;

    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Upload is not a multipart form");
        AppError::InvalidInput("No valid PDF file provided.".to_string())
    })?;
    let file = extract_multipart_file(multipart).await?;

    let stored = store_pdf(
        storage.as_ref(),
        file,
        &UploadOptions::from_config(&state.config),
    )
    .await?;

    Ok(Json(UploadResponse {
        message: "PDF successfully uploaded.".to_string(),
        file: stored,
    }))
}
