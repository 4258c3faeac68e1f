use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A row of a JSON-array collection, addressed by its string `id`.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, used in logs.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn name(&self) -> &str;

    fn summary(&self) -> Summary {
        Summary { id: self.id().to_string(), name: self.name().to_string() }
    }
}

/// Field-by-field update of a record from its patch type.
///
/// `None` leaves a field untouched. For optional fields the patch carries
/// `Option<Option<String>>`, where `Some(None)` clears the stored value.
pub trait Merge: Record {
    type Patch: Send + 'static;

    fn merge(&mut self, patch: Self::Patch);
}

/// `{id, name}` projection returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub name: String,
}
