//! File record metadata for filedrop.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata for one uploaded file.
///
/// Serialized camelCase, both in API responses and in the on-disk
/// snapshot, so the two formats stay interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique record ID: the creation timestamp in epoch milliseconds,
    /// rendered as a decimal string. Two uploads landing in the same
    /// millisecond collide; see DESIGN.md.
    pub id: String,
    /// Original client-supplied filename, stored as-is.
    pub name: String,
    /// On-disk blob name ({millis}-{random}-{basename} format).
    pub stored_name: String,
    /// Client-declared media type. Trusted, never verified against the bytes.
    pub content_type: String,
    /// Blob size in bytes as reported by the storage layer at write time.
    pub size_bytes: u64,
    /// Free-text description. Non-empty.
    pub description: String,
    /// Creation time in epoch milliseconds. Display time and sort key.
    pub created_at_millis: i64,
    /// Location the blob can be fetched from.
    pub access_path: String,
}
