//! Blob storage for filedrop.
//!
//! Uploaded binaries live in one flat directory. Stored names combine the
//! upload timestamp, a random suffix, and the original filename's basename
//! so concurrent uploads of the same file cannot collide on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::Result;

/// Blob storage rooted at a single directory.
///
/// The directory is created on demand at write time, so a missing or
/// unwritable directory shows up in the status report rather than at
/// startup.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

/// Outcome of a blob write.
#[derive(Debug, Clone)]
pub struct SavedBlob {
    /// Generated on-disk name.
    pub stored_name: String,
    /// Size in bytes as reported by the filesystem after the write.
    pub size_bytes: u64,
}

impl FileStorage {
    /// Create storage rooted at the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory of this storage.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Save content under a freshly generated stored name.
    ///
    /// No limit is placed on content size or type.
    pub fn save(&self, content: &[u8], original_name: &str) -> Result<SavedBlob> {
        fs::create_dir_all(&self.base_path)?;

        let stored_name = Self::generate_stored_name(original_name);
        let path = self.file_path(&stored_name);
        fs::write(&path, content)?;
        let size_bytes = fs::metadata(&path)?.len();

        Ok(SavedBlob {
            stored_name,
            size_bytes,
        })
    }

    /// Delete a blob.
    ///
    /// Returns `true` if the blob was deleted, `false` if it was already
    /// absent.
    pub fn delete(&self, stored_name: &str) -> Result<bool> {
        match fs::remove_file(self.file_path(stored_name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether a blob exists.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.file_path(stored_name).exists()
    }

    /// Full path of a stored blob.
    pub fn file_path(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Probe whether the storage directory is writable.
    ///
    /// Creates and removes a throwaway file; an explicit check rather than
    /// an inference from directory metadata.
    pub fn probe_writable(&self) -> bool {
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
        let probe = self.base_path.join(format!(".writable-probe-{suffix}"));

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&probe)
        {
            Ok(file) => {
                drop(file);
                let _ = fs::remove_file(&probe);
                true
            }
            Err(_) => false,
        }
    }

    /// Generate a collision-avoiding stored name for an upload.
    ///
    /// Only the basename of the client-supplied name is used, so a hostile
    /// filename cannot place the blob outside the storage directory.
    pub fn generate_stored_name(original_name: &str) -> String {
        let base = Path::new(original_name)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.bin");
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

        format!("{millis}-{suffix}-{base}")
    }
}
