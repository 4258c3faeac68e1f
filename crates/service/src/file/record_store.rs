use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use crate::errors::ServiceError;
use crate::file::{category_store::CategoryStore, item_store::ItemStore, location_store::LocationStore};

/// Backing file for each collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub categories: PathBuf,
    pub locations: PathBuf,
    pub items: PathBuf,
}

impl StoreConfig {
    /// `categories.json`, `locations.json` and `items.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            categories: dir.join("categories.json"),
            locations: dir.join("locations.json"),
            items: dir.join("items.json"),
        }
    }
}

/// The three inventory collections, opened together.
#[derive(Clone)]
pub struct RecordStore {
    pub categories: Arc<CategoryStore>,
    pub locations: Arc<LocationStore>,
    pub items: Arc<ItemStore>,
}

impl RecordStore {
    /// Open every collection, creating missing files as empty arrays.
    pub async fn open(config: &StoreConfig) -> Result<Self, ServiceError> {
        let categories = CategoryStore::new(&config.categories).await?;
        let locations = LocationStore::new(&config.locations).await?;
        let items = ItemStore::new(&config.items).await?;
        info!(
            categories = %config.categories.display(),
            locations = %config.locations.display(),
            items = %config.items.display(),
            "record store opened"
        );
        Ok(Self { categories, locations, items })
    }
}
