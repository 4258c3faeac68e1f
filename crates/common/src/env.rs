//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the data and uploads directories exist, creating them if missing.
pub async fn ensure_env(data_dir: &Path, uploads_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;

    if tokio::fs::metadata(uploads_dir).await.is_err() {
        warn!(uploads_dir = %uploads_dir.display(), "uploads directory not found; creating it");
        tokio::fs::create_dir_all(uploads_dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", uploads_dir.display()))?;
    }
    info!(data_dir = %data_dir.display(), uploads_dir = %uploads_dir.display(), "runtime directories ready");
    Ok(())
}
