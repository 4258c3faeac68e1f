use serde::{Deserialize, Serialize};

use crate::errors::{is_missing, ModelError};
use crate::record::{Merge, Record};

/// An inventory item. `category_id`/`location_id` are stored verbatim and are
/// never checked against the other collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: String,
    pub category_id: String,
    pub location_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stored filename of the uploaded photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(
        category_id: impl Into<String>,
        location_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            category_id: category_id.into(),
            location_id: location_id.into(),
            name: name.into(),
            description: None,
            image: None,
        }
    }
}

impl Record for Item {
    const COLLECTION: &'static str = "items";

    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn name(&self) -> &str { &self.name }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub category_id: Option<String>,
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl ItemPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }
}

impl Merge for Item {
    type Patch = ItemPatch;

    fn merge(&mut self, patch: ItemPatch) {
        if let Some(v) = patch.category_id { self.category_id = v; }
        if let Some(v) = patch.location_id { self.location_id = v; }
        if let Some(v) = patch.name { self.name = v; }
        if let Some(v) = patch.description { self.description = v; }
        if let Some(v) = patch.image { self.image = v; }
    }
}

/// Text fields of an item create/replace request, from JSON or a multipart form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemInput {
    fn check(&self) -> Result<(), ModelError> {
        if is_missing(&self.category_id) || is_missing(&self.location_id) || is_missing(&self.name) {
            return Err(ModelError::Validation(
                "Category ID, Location ID, and Name are required fields".into(),
            ));
        }
        Ok(())
    }

    pub fn validate(self, image: Option<String>) -> Result<Item, ModelError> {
        self.check()?;
        Ok(Item {
            id: String::new(),
            category_id: self.category_id.unwrap_or_default(),
            location_id: self.location_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            image,
        })
    }

    /// PUT semantics: the four text fields are replaced, the image is kept.
    pub fn into_patch(self) -> Result<ItemPatch, ModelError> {
        self.check()?;
        Ok(ItemPatch {
            category_id: self.category_id,
            location_id: self.location_id,
            name: self.name,
            description: Some(self.description),
            image: None,
        })
    }
}
