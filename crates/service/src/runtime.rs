//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the data and uploads directories exist.
pub async fn ensure_env(data_dir: &Path, uploads_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir, uploads_dir).await
}
