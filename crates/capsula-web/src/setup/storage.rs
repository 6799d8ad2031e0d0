//! Storage setup and initialization

use anyhow::{Context, Result};
use capsula_core::Config;
use capsula_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured storage backend and verify the destination folder is
/// reachable. An unreachable or unauthorized backend is fatal at startup.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage backend...");
    let storage = create_storage(config).await?;
    let backend_type = storage.backend_type();

    let folder_name = storage
        .verify_destination()
        .await
        .context("Destination folder check failed at startup")?;

    tracing::info!(
        backend = %backend_type,
        folder_id = %config.folder_id(),
        folder_name = %folder_name,
        "Storage backend initialized"
    );

    Ok(storage)
}
