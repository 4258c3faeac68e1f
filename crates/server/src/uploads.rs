//! Item photo uploads.
//!
//! Files are written under the configured uploads directory with a fresh
//! `<uuid><.ext>` name; only that filename is stored on the item.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// Upper bound for an item create request carrying a photo.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ImageUploads {
    dir: PathBuf,
}

impl ImageUploads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` and return the generated filename.
    pub async fn store(&self, original_name: Option<&str>, bytes: &[u8]) -> std::io::Result<String> {
        let filename = stored_name(original_name);
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.dir.join(&filename), bytes).await?;
        info!(%filename, size = bytes.len(), "image stored");
        Ok(filename)
    }
}

/// Random name keeping the original extension, e.g. `photo.JPG` -> `<uuid>.JPG`.
fn stored_name(original_name: Option<&str>) -> String {
    let ext = original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{}{}", Uuid::new_v4(), ext)
}
