//! PDF Shelf API Library
//!
//! This crate provides the HTTP handlers, session gate, middleware, and application
//! setup for the password-protected PDF shelf.

mod api_doc;
mod handlers;
mod middleware;
mod telemetry;
mod utils;
mod views;

// Public modules
pub mod auth;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::{AppState, StorageHandle};
