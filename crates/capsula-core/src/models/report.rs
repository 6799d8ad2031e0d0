//! Batch upload domain models.
//!
//! Everything here is request-scoped: an [`UploadRequest`] is parsed from one
//! form submission, folded into an [`UploadReport`], rendered, and dropped.
//! Nothing is persisted locally.

use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One uploaded file within a multipart batch.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub original_filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl FilePart {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// A parsed upload submission: guest identity, consent, and ordered file parts.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub guest_name: String,
    pub message: Option<String>,
    pub consent: bool,
    pub files: Vec<FilePart>,
}

/// Why a file part was rejected. Closed set; the display strings are part of
/// the report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    EmptyFile,
    ExceedsSizeLimit,
    UnsupportedType,
    StorageError,
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RejectReason::EmptyFile => write!(f, "empty file"),
            RejectReason::ExceedsSizeLimit => write!(f, "exceeds size limit"),
            RejectReason::UnsupportedType => write!(f, "unsupported type"),
            RejectReason::StorageError => write!(f, "storage error"),
        }
    }
}

/// Per-file result recorded in the report.
///
/// A part is `Accepted` only after the storage backend confirms creation;
/// every failure mode ends up as `Rejected` with one of the closed reasons.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadOutcome {
    Accepted {
        original_filename: String,
        stored_name: String,
        remote_file_id: String,
        web_link: Option<String>,
        size_bytes: usize,
    },
    Rejected {
        original_filename: String,
        reason: RejectReason,
    },
}

impl UploadOutcome {
    pub fn original_filename(&self) -> &str {
        match self {
            UploadOutcome::Accepted {
                original_filename, ..
            } => original_filename,
            UploadOutcome::Rejected {
                original_filename, ..
            } => original_filename,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, UploadOutcome::Accepted { .. })
    }
}

/// Ordered per-file outcomes plus summary counts for one request.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    pub guest_name: String,
    pub outcomes: Vec<UploadOutcome>,
    pub accepted: usize,
    pub rejected: usize,
}

impl UploadReport {
    /// Build a report from ordered outcomes. Counts always sum to the number
    /// of outcomes.
    pub fn from_outcomes(guest_name: String, outcomes: Vec<UploadOutcome>) -> Self {
        let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
        let rejected = outcomes.len() - accepted;
        UploadReport {
            guest_name,
            outcomes,
            accepted,
            rejected,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
