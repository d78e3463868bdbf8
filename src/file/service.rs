//! File service for filedrop.
//!
//! High-level operations tying the record store and blob storage
//! together: upload, list, delete, and the status report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::{FileDropError, Result};

use super::record::FileRecord;
use super::storage::FileStorage;
use super::store::FileStore;
use super::UPLOADS_PREFIX;

/// Request data for a file upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original filename as supplied by the client.
    pub name: String,
    /// Client-declared media type, if any.
    pub content_type: Option<String>,
    /// Free-text description. Must be non-empty.
    pub description: String,
    /// File content.
    pub content: Vec<u8>,
}

/// Structured health snapshot of the storage layer.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Storage directory path.
    pub files_dir: PathBuf,
    /// Whether the storage directory exists.
    pub files_dir_exists: bool,
    /// Whether the storage directory accepts writes (probed).
    pub files_dir_writable: bool,
    /// Snapshot document path.
    pub database_path: PathBuf,
    /// Whether the snapshot document exists.
    pub database_exists: bool,
    /// Current record count.
    pub file_count: usize,
}

/// File service for uploads, listing, and deletion.
pub struct FileService {
    store: Arc<FileStore>,
    storage: FileStorage,
    database_path: PathBuf,
    public_base_url: Option<String>,
}

impl FileService {
    /// Create a new FileService.
    pub fn new(
        store: Arc<FileStore>,
        storage: FileStorage,
        database_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            storage,
            database_path: database_path.into(),
            public_base_url: None,
        }
    }

    /// Prefix access paths with a public base URL.
    pub fn with_public_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.public_base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Storage directory the blobs are served from.
    pub fn files_dir(&self) -> &Path {
        self.storage.base_path()
    }

    /// Upload a file.
    ///
    /// Writes the blob, then appends a fresh record to the store. The
    /// record `id` and `createdAtMillis` come from one clock read; two
    /// uploads in the same millisecond share an id (see DESIGN.md).
    pub fn upload(&self, request: UploadRequest) -> Result<FileRecord> {
        if request.description.trim().is_empty() {
            return Err(FileDropError::Validation(
                "description is required".to_string(),
            ));
        }

        let saved = self.storage.save(&request.content, &request.name)?;
        let now = Utc::now().timestamp_millis();

        let content_type = request
            .content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| {
                mime_guess::from_path(&request.name)
                    .first_or_octet_stream()
                    .to_string()
            });

        let record = FileRecord {
            id: now.to_string(),
            name: request.name,
            stored_name: saved.stored_name.clone(),
            content_type,
            size_bytes: saved.size_bytes,
            description: request.description,
            created_at_millis: now,
            access_path: self.access_path(&saved.stored_name),
        };

        self.store.append(record.clone());
        tracing::info!(id = %record.id, name = %record.name, size = record.size_bytes, "file uploaded");

        Ok(record)
    }

    /// All records, newest first. An empty collection is a valid result.
    pub fn list(&self) -> Vec<FileRecord> {
        self.store.list()
    }

    /// Delete a file and its backing blob.
    ///
    /// The blob is unlinked first; a blob that is already absent is logged
    /// and tolerated. The operation succeeds once the metadata entry is
    /// gone.
    pub fn delete(&self, id: &str) -> Result<FileRecord> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| FileDropError::NotFound("file".to_string()))?;

        if !self.storage.delete(&record.stored_name)? {
            tracing::warn!(stored_name = %record.stored_name, "blob already absent on delete");
        }

        let removed = self.store.remove(id)?;
        tracing::info!(id = %removed.id, name = %removed.name, "file deleted");
        Ok(removed)
    }

    /// Build the status report for the storage layer.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            files_dir: self.storage.base_path().to_path_buf(),
            files_dir_exists: self.storage.base_path().exists(),
            files_dir_writable: self.storage.probe_writable(),
            database_path: self.database_path.clone(),
            database_exists: self.database_path.exists(),
            file_count: self.store.count(),
        }
    }

    fn access_path(&self, stored_name: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{base}{UPLOADS_PREFIX}/{stored_name}"),
            None => format!("{UPLOADS_PREFIX}/{stored_name}"),
        }
    }
}
