use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::debug;
use uuid::Uuid;

use models::{Merge, Record};

use crate::errors::ServiceError;

/// Generic JSON file-backed collection.
///
/// Persists a `Vec<T>` as a bare JSON array. Nothing is cached: every call
/// reads the whole file, changes the array in memory and writes the whole
/// file back with a single `fs::write` (no fsync, no rename). The mutex
/// serializes that read-modify-write cycle within one process only.
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> JsonArrayStore<T> {
    /// Open the collection at `path`. Creates the file containing `[]` if missing;
    /// an existing file is left untouched and its contents are not checked.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        match fs::metadata(&file_path).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::write(&file_path, b"[]")
                    .await
                    .map_err(|e| ServiceError::io(&file_path, e))?;
                debug!(collection = T::COLLECTION, path = %file_path.display(), "initialized empty collection file");
            }
            Err(e) => return Err(ServiceError::io(&file_path, e)),
        }

        Ok(Arc::new(Self { file_path, lock: Mutex::new(()), _records: PhantomData }))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn read_all(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::io(&self.file_path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| ServiceError::Malformed {
            path: self.file_path.clone(),
            source,
        })
    }

    async fn write_all(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(records)
            .map_err(|source| ServiceError::Encode { collection: T::COLLECTION, source })?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::io(&self.file_path, e))
    }

    /// Append a record and persist. An empty id is replaced by a fresh UUID v4;
    /// a caller-supplied id is kept even if another record already uses it.
    pub async fn save(&self, mut record: T) -> Result<T, ServiceError> {
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        records.push(record.clone());
        self.write_all(&records).await?;
        debug!(collection = T::COLLECTION, id = record.id(), "record saved");
        Ok(record)
    }

    /// All records in file order.
    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    /// First record with the given id, or `None`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, ServiceError> {
        let _guard = self.lock.lock().await;
        let records = self.read_all().await?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    /// Drop every record with the given id and persist. Missing ids are not an error.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        self.write_all(&records).await?;
        debug!(collection = T::COLLECTION, id, removed = before - records.len(), "records deleted");
        Ok(())
    }
}

impl<T: Merge> JsonArrayStore<T> {
    /// Merge `patch` into the first record with the given id and persist.
    /// Returns `None` without touching the file when no record matches.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        record.merge(patch);
        let merged = record.clone();
        self.write_all(&records).await?;
        debug!(collection = T::COLLECTION, id, "record updated");
        Ok(Some(merged))
    }
}
