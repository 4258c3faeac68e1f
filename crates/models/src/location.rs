use serde::{Deserialize, Serialize};

use crate::errors::{is_missing, ModelError};
use crate::record::{Merge, Record};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self { id: String::new(), name: name.into(), description }
    }
}

impl Record for Location {
    const COLLECTION: &'static str = "locations";

    fn id(&self) -> &str { &self.id }
    fn set_id(&mut self, id: String) { self.id = id; }
    fn name(&self) -> &str { &self.name }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Merge for Location {
    type Patch = LocationPatch;

    fn merge(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Request body for creating or replacing a location.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LocationInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LocationInput {
    fn check(&self) -> Result<(), ModelError> {
        if is_missing(&self.name) {
            return Err(ModelError::Validation("Name is a required field".into()));
        }
        Ok(())
    }

    pub fn validate(self) -> Result<Location, ModelError> {
        self.check()?;
        Ok(Location::new(self.name.unwrap_or_default(), self.description))
    }

    /// PUT semantics: both tracked fields are replaced, so a missing
    /// description clears the stored one.
    pub fn into_patch(self) -> Result<LocationPatch, ModelError> {
        self.check()?;
        Ok(LocationPatch { name: self.name, description: Some(self.description) })
    }
}
