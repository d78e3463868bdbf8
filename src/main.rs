use std::sync::Arc;

use tracing::info;

use filedrop::file::{FileService, FileStorage, FileStore, JsonSnapshot};
use filedrop::web::handlers::AppState;
use filedrop::web::WebServer;
use filedrop::webhook::WebhookNotifier;
use filedrop::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = filedrop::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        filedrop::logging::init_console_only(&config.logging.level);
    }

    info!("filedrop - file drop service");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let store = Arc::new(FileStore::open(Box::new(JsonSnapshot::new(
        &config.storage.database_file,
    ))));
    let storage = FileStorage::new(&config.storage.files_dir);
    let mut service = FileService::new(store, storage, &config.storage.database_file);
    if let Some(ref base_url) = config.storage.public_base_url {
        service = service.with_public_base_url(base_url);
    }

    let mut app_state = AppState::new(service);
    if let Some(ref endpoint) = config.webhook.endpoint {
        match WebhookNotifier::new(endpoint, &config.webhook.preview) {
            Ok(notifier) => {
                info!("Webhook notifier configured for {}", notifier.endpoint());
                app_state = app_state.with_notifier(notifier);
            }
            Err(e) => {
                tracing::warn!(error = %e, "webhook notifier disabled");
            }
        }
    }

    let server = WebServer::new(&config, Arc::new(app_state));
    if let Err(e) = server.run().await {
        tracing::error!(error = %e, "web server failed");
        std::process::exit(1);
    }
}
