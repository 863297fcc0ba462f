use crate::error::{log_error, status_of};
use crate::services::listing::list_files;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use pdfshelf_core::{AppError, ErrorMetadata};
use std::sync::Arc;

/// Home page with the upload form and the bucket listing.
///
/// Failures are rendered into the page with the error's status code.
#[tracing::instrument(skip(state), fields(operation = "home"))]
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let result = match state.storage() {
        Ok(storage) => list_files(storage.as_ref(), state.presigned_url_ttl())
            .await
            .map_err(AppError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(files) => Html(views::home_page(&files, None)).into_response(),
        Err(e) => {
            log_error(&e);
            (
                status_of(&e),
                Html(views::home_page(&[], Some(&e.client_message()))),
            )
                .into_response()
        }
    }
}
