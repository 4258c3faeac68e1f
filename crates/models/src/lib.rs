//! Inventory entities as they are stored on disk and exchanged over HTTP.
//!
//! Every entity is a flat JSON object with a string `id`. Optional fields are
//! omitted when absent; `categoryId`/`locationId` use camelCase on the wire.

pub mod errors;
pub mod record;
pub mod category;
pub mod location;
pub mod item;

pub use category::{Category, CategoryInput};
pub use item::{Item, ItemInput, ItemPatch};
pub use location::{Location, LocationInput, LocationPatch};
pub use record::{Merge, Record, Summary};
