//! In-memory file record store mirrored to a snapshot backend.

use std::sync::{Mutex, MutexGuard};

use crate::{FileDropError, Result};

use super::record::FileRecord;
use super::snapshot::SnapshotStore;

/// Single source of truth for the file record collection.
///
/// Records live in memory and the full collection is written through the
/// snapshot backend on every mutation. Mutations and their persists run
/// under one mutex, so concurrent handlers cannot interleave a
/// read-modify-write against the snapshot file.
///
/// A failed persist is logged and does not roll back the in-memory
/// mutation; memory may run ahead of disk until the next successful write.
pub struct FileStore {
    records: Mutex<Vec<FileRecord>>,
    backend: Box<dyn SnapshotStore>,
}

impl FileStore {
    /// Open a store backed by the given snapshot backend.
    ///
    /// A load failure (malformed or unreadable snapshot) is logged and the
    /// store starts empty; startup never fails on snapshot state.
    pub fn open(backend: Box<dyn SnapshotStore>) -> Self {
        let records = match backend.load() {
            Ok(records) => {
                tracing::info!(count = records.len(), "loaded file records");
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load snapshot, starting empty");
                Vec::new()
            }
        };

        Self {
            records: Mutex::new(records),
            backend,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FileRecord>> {
        self.records.lock().expect("file store mutex poisoned")
    }

    /// Insert a new record and persist the collection.
    ///
    /// No `id` deduplication is performed.
    pub fn append(&self, record: FileRecord) {
        let mut records = self.lock();
        records.push(record);
        self.persist(&records);
    }

    /// Remove the record with the given id and persist the collection.
    ///
    /// Returns the removed record, or `NotFound` when the id is unknown
    /// (leaving the collection unchanged).
    pub fn remove(&self, id: &str) -> Result<FileRecord> {
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FileDropError::NotFound("file".to_string()))?;
        let removed = records.remove(index);
        self.persist(&records);
        Ok(removed)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<FileRecord> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    /// All records ordered by creation time descending (newest first).
    ///
    /// Ties keep insertion order (stable sort).
    pub fn list(&self) -> Vec<FileRecord> {
        let mut records = self.lock().clone();
        records.sort_by(|a, b| b.created_at_millis.cmp(&a.created_at_millis));
        records
    }

    /// Number of records currently in the store.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn persist(&self, records: &[FileRecord]) {
        if let Err(e) = self.backend.persist(records) {
            tracing::error!(error = %e, "failed to persist snapshot; memory is ahead of disk");
        }
    }
}
