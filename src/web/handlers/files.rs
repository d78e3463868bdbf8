//! File handlers for the web API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use utoipa;

use crate::file::{FileRecord, UploadRequest};
use crate::web::dto::DeleteResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/upload - Upload a file.
///
/// Request body: multipart/form-data with "file" and "description" fields.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "files",
    responses(
        (status = 200, description = "File uploaded", body = FileRecord),
        (status = 400, description = "No file selected or empty description"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FileRecord>, ApiError> {
    let mut name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut description: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = %e, "failed to read multipart field");
        ApiError::bad_request("invalid multipart data")
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                name = field.file_name().map(|s| s.to_string());
                content_type = field.content_type().map(|s| s.to_string());
                content = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            tracing::error!(error = %e, "failed to read file content");
                            ApiError::bad_request("failed to read file")
                        })?
                        .to_vec(),
                );
            }
            "description" => {
                description = Some(field.text().await.map_err(|e| {
                    tracing::error!(error = %e, "failed to read description");
                    ApiError::bad_request("invalid description")
                })?);
            }
            _ => {}
        }
    }

    let (Some(name), Some(content)) = (name, content) else {
        return Err(ApiError::bad_request("no file selected"));
    };

    let record = state.service.upload(UploadRequest {
        name,
        content_type,
        description: description.unwrap_or_default(),
        content,
    })?;

    Ok(Json(record))
}

/// GET /api/files-list - List all files, newest first.
#[utoipa::path(
    get,
    path = "/api/files-list",
    tag = "files",
    responses(
        (status = 200, description = "All file records, newest first", body = Vec<FileRecord>)
    )
)]
pub async fn list_files(State(state): State<Arc<AppState>>) -> Json<Vec<FileRecord>> {
    Json(state.service.list())
}

/// DELETE /api/files/:id - Delete a file and its blob.
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = String, Path, description = "File record ID")
    ),
    responses(
        (status = 200, description = "File deleted", body = DeleteResponse),
        (status = 404, description = "Unknown file ID"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.service.delete(&id)?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "file deleted".to_string(),
    }))
}
