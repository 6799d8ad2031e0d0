#[cfg(feature = "storage-drive")]
use crate::DriveStorage;
#[cfg(feature = "storage-local")]
use crate::LocalStorage;
use crate::{Storage, StorageError, StorageResult};
use capsula_core::{Config, StorageBackend};
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let backend = config.storage_backend().unwrap_or(StorageBackend::Drive);

    match backend {
        #[cfg(feature = "storage-drive")]
        StorageBackend::Drive => {
            // Inline credentials take priority over the key file, so hosted
            // deployments can inject the key without a mounted file.
            let key_json = match config.service_account_json() {
                Some(json) => json.to_string(),
                None => tokio::fs::read_to_string(config.service_account_file())
                    .await
                    .map_err(|e| {
                        StorageError::ConfigError(format!(
                            "Service account credentials not found: failed to read {} ({}). \
                             Set GOOGLE_SERVICE_ACCOUNT_JSON or provide the key file.",
                            config.service_account_file(),
                            e
                        ))
                    })?,
            };

            let storage = DriveStorage::from_json(&key_json, config.folder_id().to_string())?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-drive"))]
        StorageBackend::Drive => Err(StorageError::ConfigError(
            "Drive storage backend not available (storage-drive feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config
                .local_storage_path()
                .map(String::from)
                .ok_or_else(|| {
                    StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
                })?;
            let base_url = config.local_storage_base_url().map(String::from);

            let storage = LocalStorage::new(base_path, base_url).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
