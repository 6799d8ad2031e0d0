//! Mock Storage implementation for testing

use async_trait::async_trait;
use capsula_storage::{Storage, StorageBackend, StorageError, StorageResult, StoredFile};
use std::collections::HashSet;
use std::sync::Mutex;

/// One successful upload recorded by the mock.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub filename: String,
    pub content_type: String,
    pub description: Option<String>,
    pub size_bytes: usize,
}

/// Mock storage that records uploads in memory and can fail on selected
/// call numbers (1-based) to exercise per-file failure handling.
pub struct MockStorage {
    uploads: Mutex<Vec<RecordedUpload>>,
    fail_calls: HashSet<usize>,
    calls: Mutex<usize>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_calls: calls.iter().copied().collect(),
            calls: Mutex::new(0),
        }
    }

    /// Number of upload attempts made, including injected failures.
    pub fn upload_attempts(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Successful uploads, in call order.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        description: Option<&str>,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };

        if self.fail_calls.contains(&call) {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }

        self.uploads.lock().unwrap().push(RecordedUpload {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            description: description.map(|s| s.to_string()),
            size_bytes: data.len(),
        });

        Ok(StoredFile {
            id: format!("mock-{}", call),
            name: filename.to_string(),
            web_link: Some(format!("https://storage.example.com/files/mock-{}", call)),
        })
    }

    async fn verify_destination(&self) -> StorageResult<String> {
        Ok("mock-folder".to_string())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
