//! Status handler for the web API.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use utoipa;

use crate::web::dto::{DatabaseStatus, DirectoryStatus, StatusResponse};
use crate::web::handlers::AppState;

/// GET /api/status - Storage health snapshot.
///
/// Always answers 200 with the snapshot; an unavailable storage directory
/// is data in the report, not a handler failure.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "status",
    responses(
        (status = 200, description = "Server status", body = StatusResponse)
    )
)]
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let report = state.service.status();

    Json(StatusResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        files_directory: DirectoryStatus {
            path: report.files_dir.display().to_string(),
            exists: report.files_dir_exists,
            writable: report.files_dir_writable,
        },
        database: DatabaseStatus {
            path: report.database_path.display().to_string(),
            exists: report.database_exists,
            file_count: report.file_count,
        },
    })
}
