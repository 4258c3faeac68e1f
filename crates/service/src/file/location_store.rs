use std::{path::PathBuf, sync::Arc};

use models::{Location, LocationPatch};

use crate::errors::ServiceError;
use crate::repository::LocationRepository;
use crate::storage::json_array_store::JsonArrayStore;

/// File-backed location collection.
#[derive(Clone)]
pub struct LocationStore {
    store: Arc<JsonArrayStore<Location>>,
}

impl LocationStore {
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<Location>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub async fn save(&self, location: Location) -> Result<Location, ServiceError> {
        self.store.save(location).await
    }

    pub async fn list(&self) -> Result<Vec<Location>, ServiceError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Location>, ServiceError> {
        self.store.get_by_id(id).await
    }

    pub async fn update(&self, id: &str, patch: LocationPatch) -> Result<Option<Location>, ServiceError> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete(id).await
    }
}

#[async_trait::async_trait]
impl LocationRepository for LocationStore {
    async fn save(&self, location: Location) -> Result<Location, ServiceError> { self.save(location).await }
    async fn list(&self) -> Result<Vec<Location>, ServiceError> { self.list().await }
    async fn get_by_id(&self, id: &str) -> Result<Option<Location>, ServiceError> { self.get_by_id(id).await }
    async fn update(&self, id: &str, patch: LocationPatch) -> Result<Option<Location>, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: &str) -> Result<(), ServiceError> { self.delete(id).await }
}
