pub mod error_details;
pub mod security_headers;

pub use error_details::redact_error_details;
pub use security_headers::{security_headers_middleware, SecurityHeadersConfig};
