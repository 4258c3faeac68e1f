use crate::errors::ServiceError;
use async_trait::async_trait;
use models::{Location, LocationPatch};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn save(&self, location: Location) -> Result<Location, ServiceError>;
    async fn list(&self) -> Result<Vec<Location>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Location>, ServiceError>;
    async fn update(&self, id: &str, patch: LocationPatch) -> Result<Option<Location>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
