//! Deletion integration tests.
//!
//! Run with: `cargo test -p pdfshelf-api --test delete_test`

mod helpers;

use axum::http::StatusCode;
use helpers::auth::location;
use helpers::{setup_test_app, setup_unconfigured_app};
use pdfshelf_storage::StorageCall;
use serde_json::Value;

#[tokio::test]
async fn test_delete_removes_object_and_redirects_home() {
    let app = setup_test_app();
    app.storage.seed("report.pdf", b"%PDF", "application/pdf").await;
    app.storage.seed("keep.pdf", b"%PDF", "application/pdf").await;

    let response = app
        .client()
        .post("/api/delete?name=report.pdf")
        .add_header("Cookie", app.session_cookie())
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/"));
    assert_eq!(app.storage.keys().await, vec!["keep.pdf"]);
}

#[tokio::test]
async fn test_delete_decodes_key() {
    let app = setup_test_app();
    app.storage
        .seed("quarterly report.pdf", b"%PDF", "application/pdf")
        .await;

    let response = app
        .client()
        .post("/api/delete?name=quarterly%20report.pdf")
        .add_header("Cookie", app.session_cookie())
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(app.storage.calls().await.contains(&StorageCall::Delete {
        key: "quarterly report.pdf".to_string()
    }));
    assert!(app.storage.keys().await.is_empty());
}

#[tokio::test]
async fn test_delete_without_name() {
    let app = setup_test_app();

    for path in ["/api/delete", "/api/delete?name="] {
        let response = app
            .client()
            .post(path)
            .add_header("Cookie", app.session_cookie())
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "POST {}", path);
        assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
    }
    assert!(app.storage.calls().await.is_empty());
}

#[tokio::test]
async fn test_delete_backend_failure_is_reported() {
    let app = setup_test_app();
    app.storage.seed("report.pdf", b"%PDF", "application/pdf").await;
    app.storage.fail_deletes("AccessDenied").await;

    let response = app
        .client()
        .post("/api/delete?name=report.pdf")
        .add_header("Cookie", app.session_cookie())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "STORAGE_ERROR");
    assert!(body["error"].as_str().unwrap().contains("AccessDenied"));
    assert_eq!(app.storage.keys().await, vec!["report.pdf"]);
}

#[tokio::test]
async fn test_delete_without_storage_configuration() {
    let app = setup_unconfigured_app();

    let response = app
        .client()
        .post("/api/delete?name=report.pdf")
        .add_header("Cookie", app.session_cookie())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "CONFIGURATION_ERROR");
}
