use axum::http::HeaderValue;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Script origin for the RapiDoc viewer served at /docs.
const DOCS_SCRIPT_ORIGIN: &str = "https://unpkg.com";

/// Security headers configuration
#[derive(Clone)]
pub struct SecurityHeadersConfig {
    pub is_production: bool,
}

impl SecurityHeadersConfig {
    pub fn new(is_production: bool) -> Self {
        Self { is_production }
    }

    /// Build Content-Security-Policy header value
    fn build_csp(&self) -> String {
        [
            "default-src 'self'".to_string(),
            format!("script-src 'self' {}", DOCS_SCRIPT_ORIGIN),
            "style-src 'self'".to_string(),
            "img-src 'self' data:".to_string(),
            "font-src 'self' data:".to_string(),
            "connect-src 'self'".to_string(),
            "form-action 'self'".to_string(),
            "frame-ancestors 'none'".to_string(),
        ]
        .join("; ")
    }
}

/// Security headers middleware
/// Adds security headers to all HTTP responses
pub async fn security_headers_middleware(
    State(config): State<Arc<SecurityHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    // Redundant with CSP frame-ancestors, kept for older browsers
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));

    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if config.is_production {
        headers.insert(
            "Strict-Transport-Security",
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    let csp = config.build_csp();
    if let Ok(header_value) = HeaderValue::from_str(&csp) {
        headers.insert("Content-Security-Policy", header_value);
    }

    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    // Listings embed presigned URLs; never cache them.
    headers.insert(
        "Cache-Control",
        HeaderValue::from_static("no-store, private"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csp_is_restrictive() {
        let csp = SecurityHeadersConfig::new(false).build_csp();
        assert!(csp.contains("default-src 'self'"));
        assert!(csp.contains("frame-ancestors 'none'"));
        assert!(!csp.contains("unsafe-inline"));
    }
}
