use crate::error::RedactedErrorBody;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Replace error bodies with their production form when the app runs in production.
pub async fn redact_error_details(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.is_production() {
        return response;
    }

    match response.extensions().get::<RedactedErrorBody>().cloned() {
        Some(RedactedErrorBody(body)) => (response.status(), Json(body)).into_response(),
        None => response,
    }
}
