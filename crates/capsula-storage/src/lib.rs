//! Capsula Storage Library
//!
//! This crate provides the storage abstraction and backends for the upload
//! service: Google Drive (service-account auth) and local filesystem.
//!
//! Every backend performs a single attempt per call. Retry and backoff are
//! deliberately absent; a failed upload is reported to the caller, which
//! records it as a per-file rejection.

#[cfg(feature = "storage-drive")]
pub mod drive;
pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use capsula_core::StorageBackend;
#[cfg(feature = "storage-drive")]
pub use drive::DriveStorage;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredFile};
