//! Web API status tests
//!
//! Integration tests for the status endpoint.

mod common;

use serde_json::Value;

use common::{create_test_server, upload_form};

#[tokio::test]
async fn test_status_before_any_upload() {
    let (server, _temp_dir) = create_test_server();

    let response = server.get("/api/status").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());

    // Storage directory is created lazily, so nothing exists yet
    assert_eq!(body["filesDirectory"]["exists"], false);
    assert_eq!(body["filesDirectory"]["writable"], false);
    assert_eq!(body["database"]["exists"], false);
    assert_eq!(body["database"]["fileCount"], 0);
}

#[tokio::test]
async fn test_status_after_upload() {
    let (server, _temp_dir) = create_test_server();

    server
        .post("/api/upload")
        .multipart(upload_form("a.txt", "text/plain", b"data", "d"))
        .await
        .assert_status_ok();

    let body: Value = server.get("/api/status").await.json();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["filesDirectory"]["exists"], true);
    assert_eq!(body["filesDirectory"]["writable"], true);
    assert_eq!(body["database"]["exists"], true);
    assert_eq!(body["database"]["fileCount"], 1);

    let dir_path = body["filesDirectory"]["path"].as_str().unwrap();
    let db_path = body["database"]["path"].as_str().unwrap();
    assert!(dir_path.ends_with("uploads"));
    assert!(db_path.ends_with("database.json"));
}

#[tokio::test]
async fn test_status_count_follows_deletes() {
    let (server, _temp_dir) = create_test_server();

    let record: Value = server
        .post("/api/upload")
        .multipart(upload_form("a.txt", "text/plain", b"data", "d"))
        .await
        .json();
    let id = record["id"].as_str().unwrap().to_string();

    let body: Value = server.get("/api/status").await.json();
    assert_eq!(body["database"]["fileCount"], 1);

    server
        .delete(&format!("/api/files/{id}"))
        .await
        .assert_status_ok();

    let body: Value = server.get("/api/status").await.json();
    assert_eq!(body["database"]["fileCount"], 0);
}
