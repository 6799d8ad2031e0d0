//! Test helpers: build the router against a mock storage backend.
//!
//! Run from workspace root: `cargo test -p capsula-web`.

pub mod storage;

use axum_test::TestServer;
use capsula_core::config::{AppConfig, BaseConfig};
use capsula_core::{Config, StorageBackend};
use capsula_storage::Storage;
use capsula_web::setup::routes::setup_routes;
use capsula_web::state::AppState;
use std::sync::Arc;

use storage::MockStorage;

/// Test application: server plus the shared mock storage for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MockStorage>,
}

/// Config with a small, test-friendly file limit.
pub fn test_config(max_file_mb: usize) -> Config {
    Config(Box::new(AppConfig {
        base: BaseConfig {
            server_port: 0,
            environment: "test".to_string(),
        },
        folder_id: "test-folder".to_string(),
        max_file_size_bytes: max_file_mb * 1024 * 1024,
        max_files_per_upload: 10,
        allowed_extensions: [
            "jpg", "jpeg", "png", "gif", "webp", "bmp", "mp4", "avi", "mov", "wmv", "pdf",
            "txt", "zip",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        allowed_content_types: [
            "image/jpeg",
            "image/png",
            "image/gif",
            "image/webp",
            "image/bmp",
            "video/mp4",
            "video/avi",
            "video/mov",
            "video/wmv",
            "video/quicktime",
            "application/pdf",
            "text/plain",
            "application/zip",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        storage_backend: Some(StorageBackend::Local),
        service_account_json: None,
        service_account_file: "service_account.json".to_string(),
        local_storage_path: None,
        local_storage_base_url: None,
    }))
}

/// Setup a test app over a fresh mock storage with the default 500 MB limit.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config(500), MockStorage::new())
}

pub fn setup_test_app_with(config: Config, storage: MockStorage) -> TestApp {
    let storage = Arc::new(storage);
    let state = Arc::new(AppState::new(
        config.clone(),
        storage.clone() as Arc<dyn Storage>,
    ));
    let router = setup_routes(&config, state);

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        storage,
    }
}
