//! Batch upload service
//!
//! The one piece of real decision logic in the system: validate the request,
//! then fold the ordered file parts into ordered per-file outcomes. Per-file
//! failures (including storage faults) never abort the batch; request-level
//! failures short-circuit before any storage call.

use std::sync::Arc;

use capsula_core::models::{FilePart, RejectReason, UploadOutcome, UploadReport, UploadRequest};
use capsula_core::validation::{file_extension, sanitize_guest_name, stored_filename};
use capsula_core::AppError;
use capsula_storage::Storage;

use crate::state::{AppState, UploadLimits};
use crate::validation::{
    validate_content_type, validate_extension_content_type_match, validate_file_extension,
};

pub struct BatchUploadService {
    limits: UploadLimits,
    storage: Arc<dyn Storage>,
}

impl BatchUploadService {
    /// Create a new BatchUploadService from application state
    pub fn new(state: &Arc<AppState>) -> Self {
        Self::from_parts(state.limits.clone(), state.storage.clone())
    }

    pub fn from_parts(limits: UploadLimits, storage: Arc<dyn Storage>) -> Self {
        Self { limits, storage }
    }

    /// Process one upload request into a report.
    ///
    /// Invariants: the report holds exactly one outcome per input part, in
    /// input order, and accepted + rejected equals the part count. An `Err`
    /// is returned only for request-level failures, before any storage call.
    pub async fn process(&self, request: UploadRequest) -> Result<UploadReport, AppError> {
        let UploadRequest {
            guest_name,
            message,
            consent,
            files,
        } = request;

        if !consent {
            return Err(AppError::InvalidInput(
                "Consent is required before uploading".to_string(),
            ));
        }

        if files.is_empty() {
            return Err(AppError::InvalidInput(
                "No files were selected".to_string(),
            ));
        }

        if files.len() > self.limits.max_files {
            return Err(AppError::PayloadTooLarge(format!(
                "At most {} files per upload",
                self.limits.max_files
            )));
        }

        let safe_name = sanitize_guest_name(&guest_name);
        let total = files.len();

        tracing::info!(
            guest = %safe_name,
            file_count = total,
            "Processing upload batch"
        );

        let mut outcomes = Vec::with_capacity(total);
        for (index, part) in files.into_iter().enumerate() {
            let outcome = self
                .process_part(part, &safe_name, index + 1, total, message.as_deref())
                .await;
            outcomes.push(outcome);
        }

        let report = UploadReport::from_outcomes(safe_name, outcomes);
        tracing::info!(
            accepted = report.accepted,
            rejected = report.rejected,
            "Upload batch processed"
        );

        Ok(report)
    }

    /// Validate and store a single part. Every failure mode maps to a
    /// `Rejected` outcome; nothing propagates.
    async fn process_part(
        &self,
        part: FilePart,
        safe_name: &str,
        sequence: usize,
        total: usize,
        message: Option<&str>,
    ) -> UploadOutcome {
        if let Some(reason) = self.reject_reason(&part) {
            tracing::debug!(
                filename = %part.original_filename,
                size_bytes = part.size_bytes(),
                reason = %reason,
                "File part rejected"
            );
            return UploadOutcome::Rejected {
                original_filename: part.original_filename,
                reason,
            };
        }

        let FilePart {
            original_filename,
            content_type,
            data,
        } = part;

        // Extension presence was checked during validation
        let extension = file_extension(&original_filename).unwrap_or_default();
        let stored_name = stored_filename(safe_name, sequence, &extension);
        let description = build_description(safe_name, message, sequence, total);
        let size_bytes = data.len();

        match self
            .storage
            .upload(&stored_name, &content_type, Some(&description), data)
            .await
        {
            Ok(stored) => UploadOutcome::Accepted {
                original_filename,
                stored_name: stored.name,
                remote_file_id: stored.id,
                web_link: stored.web_link,
                size_bytes,
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    filename = %original_filename,
                    stored_name = %stored_name,
                    "Storage upload failed, continuing with remaining files"
                );
                UploadOutcome::Rejected {
                    original_filename,
                    reason: RejectReason::StorageError,
                }
            }
        }
    }

    /// Per-file validation, in contract order: empty, size (boundary
    /// inclusive: exactly at the limit passes), then type checks.
    fn reject_reason(&self, part: &FilePart) -> Option<RejectReason> {
        if part.data.is_empty() {
            return Some(RejectReason::EmptyFile);
        }

        if part.data.len() > self.limits.max_file_size {
            return Some(RejectReason::ExceedsSizeLimit);
        }

        if validate_file_extension(&part.original_filename, &self.limits.allowed_extensions)
            .is_err()
            || validate_content_type(&part.content_type, &self.limits.allowed_content_types)
                .is_err()
            || validate_extension_content_type_match(&part.original_filename, &part.content_type)
                .is_err()
        {
            return Some(RejectReason::UnsupportedType);
        }

        None
    }
}

/// Description metadata attached to each stored file.
fn build_description(
    guest_name: &str,
    message: Option<&str>,
    sequence: usize,
    total: usize,
) -> String {
    let mut description = format!("Wedding time capsule upload\nGuest: {}", guest_name);
    if let Some(message) = message {
        description.push_str("\nMessage: ");
        description.push_str(message);
    }
    description.push_str(&format!("\nFile {} of {}", sequence, total));
    description
}
