//! File management module for filedrop.
//!
//! This module provides the upload/list/delete core:
//! - File record metadata mirrored to a JSON snapshot
//! - Blob storage with collision-avoiding stored names
//! - High-level service tying records and blobs together

mod record;
mod service;
mod snapshot;
mod storage;
mod store;

pub use record::FileRecord;
pub use service::{FileService, StatusReport, UploadRequest};
pub use snapshot::{JsonSnapshot, MemorySnapshot, SnapshotStore};
pub use storage::{FileStorage, SavedBlob};
pub use store::FileStore;

/// URL prefix under which uploaded blobs are served.
pub const UPLOADS_PREFIX: &str = "/uploads";
