//! Request/response DTOs for the filedrop web API.
//!
//! The upload and list endpoints return [`crate::file::FileRecord`]
//! directly; only the remaining endpoints need dedicated shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

/// Server status response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Overall status, `"ok"` when the handler ran.
    pub status: String,
    /// RFC3339 timestamp of the check.
    pub timestamp: String,
    /// Upload directory health.
    pub files_directory: DirectoryStatus,
    /// Snapshot document health.
    pub database: DatabaseStatus,
}

/// Upload directory health.
#[derive(Debug, Serialize, ToSchema)]
pub struct DirectoryStatus {
    /// Directory path.
    pub path: String,
    /// Whether the directory exists.
    pub exists: bool,
    /// Whether the directory accepts writes (probed).
    pub writable: bool,
}

/// Snapshot document health.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    /// Snapshot path.
    pub path: String,
    /// Whether the snapshot document exists.
    pub exists: bool,
    /// Current record count.
    pub file_count: usize,
}

/// Request body for the notify endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NotifyRequest {
    /// Sender email address.
    pub email: String,
}
