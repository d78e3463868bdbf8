//! Webhook notify handler for the web API.

use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use utoipa;

use crate::web::dto::NotifyRequest;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/notify - Trigger the configured webhook with a sender email.
///
/// The endpoint's JSON response is returned verbatim.
#[utoipa::path(
    post,
    path = "/api/notify",
    tag = "notify",
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Webhook response, passed through"),
        (status = 400, description = "Invalid email address"),
        (status = 500, description = "Webhook not configured or delivery failed")
    )
)]
pub async fn trigger_notify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotifyRequest>,
) -> Result<Json<Value>, ApiError> {
    let notifier = state
        .notifier
        .as_ref()
        .ok_or_else(|| ApiError::internal("webhook endpoint not configured"))?;

    let response = notifier.send(&request.email).await?;

    Ok(Json(response))
}
