use crate::state::AppState;
use crate::utils::redirect::found;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use pdfshelf_core::constants::SESSION_COOKIE_NAME;
use std::sync::Arc;

/// Gate for every protected route.
///
/// A request without a valid session cookie is redirected to `/login` with `302 Found`;
/// it never produces an error body.
pub async fn session_gate(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let cookie = jar.get(SESSION_COOKIE_NAME).map(|c| c.value());

    if state.auth.is_valid_session(cookie) {
        return next.run(request).await;
    }

    tracing::debug!(
        path = %request.uri().path(),
        has_cookie = cookie.is_some(),
        "Session check failed, redirecting to login"
    );
    found("/login")
}
