//! Upload handler
//!
//! Parses the multipart submission into an `UploadRequest` and delegates to
//! `BatchUploadService`; the response is the rendered per-file report.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use std::sync::Arc;

use capsula_core::models::{FilePart, UploadRequest};
use capsula_core::AppError;

use crate::error::HttpAppError;
use crate::services::upload::BatchUploadService;
use crate::state::AppState;
use crate::views;

pub async fn handle_upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, HttpAppError> {
    let request = parse_submission(multipart).await?;

    let service = BatchUploadService::new(&state);
    let report = service.process(request).await?;

    Ok(Html(views::report_page(&report)))
}

/// Extract form fields and file parts from the multipart body, preserving
/// the order file parts were submitted in.
async fn parse_submission(mut multipart: Multipart) -> Result<UploadRequest, AppError> {
    let mut guest_name = String::new();
    let mut message: Option<String> = None;
    let mut consent = false;
    let mut files: Vec<FilePart> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "guest_name" => {
                guest_name = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Failed to read field: {}", e)))?;
            }
            "message" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Failed to read field: {}", e)))?;
                if !text.trim().is_empty() {
                    message = Some(text);
                }
            }
            "consent" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Failed to read field: {}", e)))?;
                consent = parse_consent(&text);
            }
            "files" => {
                let original_filename =
                    field.file_name().map(|s: &str| s.to_string()).unwrap_or_default();
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                // Browsers submit one empty unnamed part when no file is chosen
                if original_filename.is_empty() && data.is_empty() {
                    continue;
                }

                files.push(FilePart {
                    original_filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(UploadRequest {
        guest_name,
        message,
        consent,
        files,
    })
}

/// Checkboxes post "on" by default; accept the common truthy spellings.
fn parse_consent(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_accepts_checkbox_values() {
        assert!(parse_consent("on"));
        assert!(parse_consent("true"));
        assert!(parse_consent("1"));
        assert!(parse_consent("Yes"));
    }

    #[test]
    fn consent_rejects_everything_else() {
        assert!(!parse_consent(""));
        assert!(!parse_consent("off"));
        assert!(!parse_consent("false"));
        assert!(!parse_consent("0"));
    }
}
