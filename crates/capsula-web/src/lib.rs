//! Capsula Web Library
//!
//! This crate provides the HTTP surface of the upload service: handlers,
//! the batch-upload workflow, HTML views, and application setup.

mod handlers;
mod validation;
mod views;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
