//! Route configuration and setup.

use crate::handlers::{pages, upload};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use capsula_core::Config;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Headroom for non-file form fields and multipart framing.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    // The request body ceiling must admit a full batch of maximum-size files;
    // individual files are still checked against the per-file limit.
    let body_limit =
        config.max_file_size_bytes() * config.max_files_per_upload() + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(pages::root))
        .route("/upload", get(pages::upload_form).post(upload::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
