//! Password login and session cookie verification.

pub mod middleware;
pub mod session;

pub use middleware::session_gate;
pub use session::SessionAuth;
