//! Route configuration and setup.

use crate::api_doc::openapi_json;
use crate::auth::session_gate;
use crate::handlers::{auth, delete, files, health, home, static_assets, upload};
use crate::middleware::{
    redact_error_details, security_headers_middleware, SecurityHeadersConfig,
};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use pdfshelf_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Headroom above the file size limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Routes reachable without a session.
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/static/upload.js", get(static_assets::upload_js))
        .route("/static/style.css", get(static_assets::style_css))
        .route("/health", get(health::health))
}

/// Routes behind the session gate.
fn protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home::home).post(upload::upload_pdf))
        .route("/home", get(home::home))
        .route("/api/upload", post(upload::upload_pdf))
        .route("/api/files", get(files::list_files))
        .route("/api/delete", post(delete::delete_file))
        .route("/api/openapi.json", get(openapi_json))
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .route_layer(axum::middleware::from_fn_with_state(state, session_gate))
}

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1024)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        max_upload_size_bytes = config.max_upload_size_bytes(),
        "HTTP limits configured"
    );

    public_routes()
        .merge(protected_routes(state.clone()))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            redact_error_details,
        ))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(
            config
                .max_upload_size_bytes()
                .saturating_add(MULTIPART_OVERHEAD_BYTES),
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state)
}
