//! Local filesystem storage backend, used in development and tests.

use crate::traits::{Storage, StorageError, StorageResult, StoredFile};
use async_trait::async_trait;
use capsula_core::StorageBackend;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: Option<String>,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory files are written into (created if missing)
    /// * `base_url` - Optional base URL used to build web links for stored
    ///   files
    pub async fn new(
        base_path: impl Into<PathBuf>,
        base_url: Option<String>,
    ) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Resolve a filename inside the base directory, rejecting anything that
    /// could escape it.
    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        Ok(self.base_path.join(filename))
    }

    fn web_link(&self, filename: &str) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(
        &self,
        filename: &str,
        _content_type: &str,
        _description: Option<&str>,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile> {
        let path = self.filename_to_path(filename)?;
        let size = data.len();

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredFile {
            id: filename.to_string(),
            name: filename.to_string(),
            web_link: self.web_link(filename),
        })
    }

    async fn verify_destination(&self) -> StorageResult<String> {
        let metadata = fs::metadata(&self.base_path).await.map_err(|e| {
            StorageError::DestinationNotFound(format!(
                "{}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        if !metadata.is_dir() {
            return Err(StorageError::DestinationNotFound(format!(
                "{} is not a directory",
                self.base_path.display()
            )));
        }

        Ok(self.base_path.display().to_string())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
