//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p pdfshelf-api`. Storage is the in-memory
//! backend, so no bucket or network access is needed.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use pdfshelf_api::auth::SessionAuth;
use pdfshelf_api::setup::{routes, storage::setup_storage};
use pdfshelf_api::state::{AppState, StorageHandle};
use pdfshelf_core::Config;
use pdfshelf_storage::MemoryStorage;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_BUCKET: &str = "test-bucket";

/// Test application: server plus a handle on the in-memory bucket behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
    pub session_token: String,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// `Cookie` header value carrying a valid session.
    pub fn session_cookie(&self) -> String {
        format!("session={}", self.session_token)
    }
}

/// Configuration with storage settings filled in and `extra` applied on top.
pub fn test_config(extra: &[(&str, &str)]) -> Config {
    let mut vars: Vec<(String, String)> = [
        ("LOGIN_PASSWORD", TEST_PASSWORD),
        ("R2_ACCESS_KEY_ID", "test-access-key"),
        ("R2_SECRET_ACCESS_KEY", "test-secret-key"),
        ("R2_BUCKET_NAME", TEST_BUCKET),
        ("R2_ENDPOINT", "http://localhost:9000"),
        ("ENVIRONMENT", "test"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    vars.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    Config::from_lookup(|name| {
        vars.iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
    .expect("Failed to build test config")
}

fn build_app(config: Config, storage: Arc<MemoryStorage>, handle: StorageHandle) -> TestApp {
    let auth = SessionAuth::from_config(&config).expect("Failed to build session auth");
    let session_token = auth.session_token().to_string();

    let state = Arc::new(AppState::new(config.clone(), handle, auth));
    let router = routes::setup_routes(&config, state);
    let server = TestServer::new(router.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        session_token,
    }
}

/// Setup test app backed by an empty in-memory bucket.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(test_config(&[]))
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let storage = Arc::new(MemoryStorage::new(TEST_BUCKET));
    let handle = StorageHandle::Ready(storage.clone());
    build_app(config, storage, handle)
}

/// Setup test app whose storage settings are missing, as at startup without R2 variables.
pub fn setup_unconfigured_app() -> TestApp {
    let config = Config::from_lookup(|name| match name {
        "LOGIN_PASSWORD" => Some(TEST_PASSWORD.to_string()),
        _ => None,
    })
    .expect("Failed to build test config");
    let handle = setup_storage(&config);
    build_app(config, Arc::new(MemoryStorage::new(TEST_BUCKET)), handle)
}
