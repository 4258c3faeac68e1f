use std::{path::PathBuf, sync::Arc};

use models::Category;

use crate::errors::ServiceError;
use crate::repository::CategoryRepository;
use crate::storage::json_array_store::JsonArrayStore;

/// File-backed category collection. Create and list only.
#[derive(Clone)]
pub struct CategoryStore {
    store: Arc<JsonArrayStore<Category>>,
}

impl CategoryStore {
    /// Open the collection file, creating it with `[]` if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<Category>::open(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub async fn save(&self, category: Category) -> Result<Category, ServiceError> {
        self.store.save(category).await
    }

    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        self.store.list().await
    }
}

#[async_trait::async_trait]
impl CategoryRepository for CategoryStore {
    async fn save(&self, category: Category) -> Result<Category, ServiceError> { self.save(category).await }
    async fn list(&self) -> Result<Vec<Category>, ServiceError> { self.list().await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn save_tools_then_list() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("svc_categories_{}.json", Uuid::new_v4()));
        let store = CategoryStore::new(&tmp).await?;

        let tools = store.save(Category::new("Tools", None)).await?;
        assert!(!tools.id.is_empty());
        assert_eq!(tools.name, "Tools");
        assert_eq!(tools.description, None);

        assert_eq!(store.list().await?, vec![tools.clone()]);

        // on disk the absent description is omitted entirely
        let raw = tokio::fs::read_to_string(&tmp).await?;
        assert_eq!(raw, format!(r#"[{{"id":"{}","name":"Tools"}}]"#, tools.id));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
