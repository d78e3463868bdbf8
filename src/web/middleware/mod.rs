//! Middleware for the filedrop web UI.

mod cors;

pub use cors::create_cors_layer;
