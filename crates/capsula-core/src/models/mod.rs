pub mod report;

pub use report::{FilePart, RejectReason, UploadOutcome, UploadReport, UploadRequest};
