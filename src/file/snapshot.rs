//! Snapshot persistence for file records.
//!
//! The store mirrors its full in-memory collection through a
//! [`SnapshotStore`] on every mutation. The production backend is a
//! single JSON document on disk; tests substitute [`MemorySnapshot`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{FileDropError, Result};

use super::record::FileRecord;

/// Persistence strategy for the record collection.
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted collection. An absent snapshot is an empty
    /// collection, not an error.
    fn load(&self) -> Result<Vec<FileRecord>>;

    /// Overwrite the persisted collection with the given records.
    fn persist(&self, records: &[FileRecord]) -> Result<()>;
}

/// JSON-file snapshot backend.
///
/// The whole collection is serialized as one pretty-printed JSON array
/// and rewritten on every persist. O(n) per mutation; fine for the
/// record counts this service is meant for.
pub struct JsonSnapshot {
    path: PathBuf,
}

impl JsonSnapshot {
    /// Create a backend writing to the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshot {
    fn load(&self) -> Result<Vec<FileRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            FileDropError::Storage(format!(
                "malformed snapshot {}: {e}",
                self.path.display()
            ))
        })
    }

    fn persist(&self, records: &[FileRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| FileDropError::Storage(format!("snapshot serialization: {e}")))?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<FileRecord>> {
        (**self).load()
    }

    fn persist(&self, records: &[FileRecord]) -> Result<()> {
        (**self).persist(records)
    }
}

/// In-memory snapshot backend for tests.
#[derive(Default)]
pub struct MemorySnapshot {
    records: Mutex<Vec<FileRecord>>,
}

impl MemorySnapshot {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records currently held by the backend.
    pub fn records(&self) -> Vec<FileRecord> {
        self.records.lock().expect("memory snapshot poisoned").clone()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Result<Vec<FileRecord>> {
        Ok(self.records())
    }

    fn persist(&self, records: &[FileRecord]) -> Result<()> {
        *self.records.lock().expect("memory snapshot poisoned") = records.to_vec();
        Ok(())
    }
}
