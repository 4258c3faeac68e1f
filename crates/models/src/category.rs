use serde::{Deserialize, Serialize};

use crate::errors::{is_missing, ModelError};
use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// New category without an id; the store assigns one on save.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self { id: String::new(), name: name.into(), description }
    }
}

impl Record for Category {
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn name(&self) -> &str { &self.name }
}

/// Request body for creating a category.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryInput {
    pub fn validate(self) -> Result<Category, ModelError> {
        if is_missing(&self.name) {
            return Err(ModelError::Validation("Name is a required field".into()));
        }
        Ok(Category::new(self.name.unwrap_or_default(), self.description))
    }
}
