use capsula_core::Config;
use capsula_storage::Storage;
use std::sync::Arc;

/// Per-request upload constraints, derived once from configuration.
#[derive(Clone)]
pub struct UploadLimits {
    pub max_file_size: usize,
    pub max_files: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        UploadLimits {
            max_file_size: config.max_file_size_bytes(),
            max_files: config.max_files_per_upload(),
            allowed_extensions: config.allowed_extensions().to_vec(),
            allowed_content_types: config.allowed_content_types().to_vec(),
        }
    }
}

/// Shared application state. Immutable after startup; requests only read
/// from it.
pub struct AppState {
    pub config: Config,
    pub limits: UploadLimits,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let limits = UploadLimits::from_config(&config);
        AppState {
            config,
            limits,
            storage,
        }
    }
}
