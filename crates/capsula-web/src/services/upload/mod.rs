//! Batch upload workflow.

mod service;

pub use service::BatchUploadService;
