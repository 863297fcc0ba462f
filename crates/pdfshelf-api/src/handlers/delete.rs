use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use pdfshelf_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParams {
    /// Storage key of the file to delete
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/delete",
    tag = "files",
    params(DeleteParams),
    responses(
        (status = 303, description = "File deleted, redirect to /"),
        (status = 302, description = "No valid session, redirect to /login"),
        (status = 400, description = "Missing file name", body = ErrorResponse),
        (status = 500, description = "Storage failure or missing storage configuration", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, params), fields(operation = "delete_file"))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteParams>,
) -> Result<Response, HttpAppError> {
    let key = params
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing file name".to_string()))?;

    let storage = state.storage()?;
    storage.delete(&key).await?;

    tracing::info!(key = %key, "File deleted");
    Ok(Redirect::to("/").into_response())
}
