//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement.

use async_trait::async_trait;
use capsula_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Access denied: {0}")]
    Unauthorized(String),

    #[error("Destination folder not found: {0}")]
    DestinationNotFound(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A file resource created in the storage backend.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Backend-assigned identifier of the created resource.
    pub id: String,
    /// Name the backend recorded for the file.
    pub name: String,
    /// Browser-viewable link to the file, when the backend provides one.
    pub web_link: Option<String>,
}

/// Storage abstraction trait
///
/// All storage backends (Google Drive, local filesystem) must implement this
/// trait. The upload handler works against `Arc<dyn Storage>` without
/// coupling to backend details.
///
/// Uploads are scoped to the one destination folder the backend was
/// constructed with; callers pass only the final filename.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create one file under the destination folder. Single attempt; any
    /// failure is returned to the caller.
    ///
    /// `description` is free-form metadata attached to the resource where
    /// the backend supports it.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        description: Option<&str>,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile>;

    /// Probe that the destination folder exists and is accessible with the
    /// configured credentials. Returns the folder's display name.
    ///
    /// Called once at startup; a failure here is fatal for the process.
    async fn verify_destination(&self) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
