use crate::errors::ServiceError;
use async_trait::async_trait;
use models::{Item, ItemPatch};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn save(&self, item: Item) -> Result<Item, ServiceError>;
    async fn list(&self) -> Result<Vec<Item>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError>;
    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
