//! Storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use verity_core::Config;
use verity_storage::{LocalStorage, Storage};

/// Create the upload directory (and the static directory next to it) and
/// return the storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage...");

    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to open upload dir {}", config.upload_dir.display()))?;

    tokio::fs::create_dir_all(&config.static_dir)
        .await
        .with_context(|| format!("Failed to create static dir {}", config.static_dir.display()))?;

    tracing::info!(
        path = %storage.base_path().display(),
        "Local storage initialized successfully"
    );

    Ok(Arc::new(storage))
}
