//! filedrop - Small self-hosted file drop service
//!
//! A browser client posts a file plus a description; the server keeps the
//! blob on disk and mirrors the metadata list to a JSON snapshot.

pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;
pub mod webhook;

pub use config::Config;
pub use error::{FileDropError, Result};
pub use file::{
    FileRecord, FileService, FileStorage, FileStore, JsonSnapshot, MemorySnapshot, SnapshotStore,
    UploadRequest,
};
pub use web::WebServer;
pub use webhook::{is_valid_email, WebhookNotifier};
