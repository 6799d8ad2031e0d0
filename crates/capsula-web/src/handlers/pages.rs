//! Form and redirect pages.

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;

use crate::state::AppState;
use crate::views;

/// The root redirects straight to the upload form.
pub async fn root() -> Redirect {
    Redirect::temporary("/upload")
}

/// Render the upload form, showing the configured limits.
pub async fn upload_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::upload_form(
        state.config.max_file_size_mb(),
        state.limits.max_files,
    ))
}
