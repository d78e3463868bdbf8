//! Router configuration for the web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::file::UPLOADS_PREFIX;

use super::handlers::{delete_file, get_status, list_files, trigger_notify, upload_file, AppState};
use super::middleware::create_cors_layer;

/// OpenAPI documentation for the filedrop API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::handlers::files::upload_file,
        crate::web::handlers::files::list_files,
        crate::web::handlers::files::delete_file,
        crate::web::handlers::status::get_status,
        crate::web::handlers::notify::trigger_notify,
    ),
    components(schemas(
        crate::file::FileRecord,
        crate::web::dto::DeleteResponse,
        crate::web::dto::StatusResponse,
        crate::web::dto::DirectoryStatus,
        crate::web::dto::DatabaseStatus,
        crate::web::dto::NotifyRequest,
        crate::web::error::ErrorBody,
    )),
    tags(
        (name = "files", description = "File upload and management"),
        (name = "status", description = "Storage health"),
        (name = "notify", description = "Outbound webhook")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
///
/// The upload body limit is disabled: any payload size is accepted.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/upload", post(upload_file))
        .route("/files-list", get(list_files))
        .route("/files/:id", delete(delete_file))
        .route("/status", get(get_status))
        .route("/notify", post(trigger_notify));

    let uploads_dir = app_state.service.files_dir().to_path_buf();

    Router::new()
        .nest("/api", api_routes)
        .nest_service(UPLOADS_PREFIX, ServeDir::new(uploads_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Create a router serving the client assets, if the directory exists.
pub fn create_static_router(static_path: &str) -> Option<Router> {
    let path = Path::new(static_path);
    if !path.is_dir() {
        tracing::warn!(path = %static_path, "static directory missing, not serving client assets");
        return None;
    }

    Some(Router::new().fallback_service(ServeDir::new(path)))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }

    #[test]
    fn test_create_swagger_router() {
        let _router = create_swagger_router();
        // Should not panic
    }

    #[test]
    fn test_create_static_router_missing_dir() {
        assert!(create_static_router("definitely/not/a/dir").is_none());
    }
}
