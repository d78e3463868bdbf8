//! Test helpers for web API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use tempfile::TempDir;

use filedrop::file::{FileService, FileStorage, FileStore, JsonSnapshot};
use filedrop::web::handlers::AppState;
use filedrop::web::router::create_router;

/// Build a file service rooted in a temp directory.
pub fn create_test_service(temp_dir: &TempDir) -> FileService {
    let database_path = temp_dir.path().join("uploads/database.json");
    let store = Arc::new(FileStore::open(Box::new(JsonSnapshot::new(&database_path))));
    let storage = FileStorage::new(temp_dir.path().join("uploads"));

    FileService::new(store, storage, &database_path)
}

/// Build application state rooted in a temp directory.
pub fn create_test_state(temp_dir: &TempDir) -> Arc<AppState> {
    Arc::new(AppState::new(create_test_service(temp_dir)))
}

/// Create a test server with a fresh storage directory.
pub fn create_test_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let server = create_test_server_in(&temp_dir);
    (server, temp_dir)
}

/// Create a test server over an existing storage directory.
///
/// Reuses whatever snapshot and blobs are already there, which makes it
/// possible to simulate a process restart.
pub fn create_test_server_in(temp_dir: &TempDir) -> TestServer {
    let state = create_test_state(temp_dir);
    let router = create_router(state, &[]);
    TestServer::new(router).expect("Failed to create test server")
}

/// Build a multipart upload form with "file" and "description" fields.
pub fn upload_form(
    name: &str,
    content_type: &str,
    content: &[u8],
    description: &str,
) -> MultipartForm {
    MultipartForm::new()
        .add_text("description", description.to_string())
        .add_part(
            "file",
            Part::bytes(content.to_vec())
                .file_name(name.to_string())
                .mime_type(content_type.to_string()),
        )
}
