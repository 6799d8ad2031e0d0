//! Configuration module
//!
//! Environment-driven configuration for the upload service: destination
//! folder, size limits, accepted types, storage credentials, and server
//! settings. Loaded once at process start and never mutated afterwards.

use std::env;

use crate::constants::{DEFAULT_MAX_FILE_MB, MAX_FILES_PER_UPLOAD};
use crate::storage_types::StorageBackend;

/// Base configuration shared by every deployment
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
}

/// Upload service configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base: BaseConfig,
    /// Opaque identifier of the destination folder in the storage backend.
    pub folder_id: String,
    pub max_file_size_bytes: usize,
    pub max_files_per_upload: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub service_account_json: Option<String>,
    pub service_account_file: String,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<AppConfig>);

impl Config {
    fn inner(&self) -> &AppConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.inner().base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = AppConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn folder_id(&self) -> &str {
        &self.inner().folder_id
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.inner().max_file_size_bytes
    }

    pub fn max_file_size_mb(&self) -> usize {
        self.inner().max_file_size_bytes / 1024 / 1024
    }

    pub fn max_files_per_upload(&self) -> usize {
        self.inner().max_files_per_upload
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.inner().allowed_extensions
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.inner().allowed_content_types
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.inner().storage_backend
    }

    pub fn service_account_json(&self) -> Option<&str> {
        self.inner().service_account_json.as_deref()
    }

    pub fn service_account_file(&self) -> &str {
        &self.inner().service_account_file
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.inner().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.inner().local_storage_base_url.as_deref()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_file_size_mb = env::var("MAX_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| {
                "jpg,jpeg,png,gif,webp,bmp,mp4,avi,mov,wmv,pdf,txt,zip".to_string()
            })
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| {
                "image/jpeg,image/png,image/gif,image/webp,image/bmp,\
                 video/mp4,video/avi,video/mov,video/wmv,video/quicktime,\
                 application/pdf,text/plain,application/zip"
                    .to_string()
            })
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
        };

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|s| s.parse::<StorageBackend>().ok());

        let config = AppConfig {
            base,
            folder_id: env::var("FOLDER_ID")
                .map_err(|_| anyhow::anyhow!("FOLDER_ID must be set"))?,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_files_per_upload: env::var("MAX_FILES_PER_UPLOAD")
                .unwrap_or_else(|_| MAX_FILES_PER_UPLOAD.to_string())
                .parse()
                .unwrap_or(MAX_FILES_PER_UPLOAD),
            allowed_extensions,
            allowed_content_types,
            storage_backend,
            service_account_json: env::var("GOOGLE_SERVICE_ACCOUNT_JSON").ok(),
            service_account_file: env::var("GOOGLE_SERVICE_ACCOUNT_FILE")
                .unwrap_or_else(|_| "service_account.json".to_string()),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.folder_id.trim().is_empty() {
            return Err(anyhow::anyhow!("FOLDER_ID cannot be empty"));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_MB cannot be 0"));
        }

        if self.max_files_per_upload == 0 {
            return Err(anyhow::anyhow!("MAX_FILES_PER_UPLOAD cannot be 0"));
        }

        if self.allowed_extensions.is_empty() || self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS and ALLOWED_CONTENT_TYPES cannot be empty"
            ));
        }

        if self.storage_backend == Some(StorageBackend::Local) && self.local_storage_path.is_none()
        {
            return Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH must be set when using the local storage backend"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            base: BaseConfig {
                server_port: 8080,
                environment: "test".to_string(),
            },
            folder_id: "folder-123".to_string(),
            max_file_size_bytes: 500 * 1024 * 1024,
            max_files_per_upload: 10,
            allowed_extensions: vec!["jpg".to_string()],
            allowed_content_types: vec!["image/jpeg".to_string()],
            storage_backend: Some(StorageBackend::Local),
            service_account_json: None,
            service_account_file: "service_account.json".to_string(),
            local_storage_path: Some("/tmp/capsula".to_string()),
            local_storage_base_url: None,
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_folder_id() {
        let mut config = test_config();
        config.folder_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_local_path_for_local_backend() {
        let mut config = test_config();
        config.local_storage_path = None;
        assert!(config.validate().is_err());
    }
}
