use std::{path::PathBuf, sync::Arc};

use models::{Item, ItemPatch};

use crate::errors::ServiceError;
use crate::repository::ItemRepository;
use crate::storage::json_array_store::JsonArrayStore;

/// File-backed item collection. Category and location ids are stored as given.
#[derive(Clone)]
pub struct ItemStore {
    store: Arc<JsonArrayStore<Item>>,
}

impl ItemStore {
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<Item>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub async fn save(&self, item: Item) -> Result<Item, ServiceError> {
        self.store.save(item).await
    }

    pub async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError> {
        self.store.get_by_id(id).await
    }

    pub async fn update(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete(id).await
    }
}

#[async_trait::async_trait]
impl ItemRepository for ItemStore {
    async fn save(&self, item: Item) -> Result<Item, ServiceError> { self.save(item).await }
    async fn list(&self) -> Result<Vec<Item>, ServiceError> { self.list().await }
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError> { self.get_by_id(id).await }
    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: &str) -> Result<(), ServiceError> { self.delete(id).await }
}
