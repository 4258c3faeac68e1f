use crate::errors::ServiceError;
use async_trait::async_trait;
use models::Category;

/// Categories can only be created and listed.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn save(&self, category: Category) -> Result<Category, ServiceError>;
    async fn list(&self) -> Result<Vec<Category>, ServiceError>;
}
