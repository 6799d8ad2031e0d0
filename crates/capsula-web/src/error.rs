//! HTTP error response conversion
//!
//! This module converts `AppError` into guest-facing HTML error pages. The
//! only surface this service exposes is the rendered form, so errors render
//! as pages rather than JSON bodies.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use capsula_core::{AppError, ErrorMetadata, LogLevel};

use crate::views;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from capsula-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Helper function to log errors based on their log level
fn log_error(error: &AppError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // client_message already hides internals for sensitive errors
        let body = views::error_page(&app_error.client_message());

        (status, Html(body)).into_response()
    }
}
