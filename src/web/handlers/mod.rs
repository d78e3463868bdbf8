//! API handlers for the filedrop web UI.

pub mod files;
pub mod notify;
pub mod status;

pub use files::*;
pub use notify::*;
pub use status::*;

use crate::file::FileService;
use crate::webhook::WebhookNotifier;

/// Shared application state for the web handlers.
pub struct AppState {
    /// File service backing the upload/list/delete endpoints.
    pub service: FileService,
    /// Webhook notifier; `None` disables the notify endpoint.
    pub notifier: Option<WebhookNotifier>,
}

impl AppState {
    /// Create application state around a file service.
    pub fn new(service: FileService) -> Self {
        Self {
            service,
            notifier: None,
        }
    }

    /// Attach a webhook notifier.
    pub fn with_notifier(mut self, notifier: WebhookNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }
}
