//! Trait seams consumed by the HTTP layer.
//!
//! Not-found lookups return `Ok(None)`; only storage failures are errors.

pub mod category;
pub mod location;
pub mod item;

pub use category::CategoryRepository;
pub use item::ItemRepository;
pub use location::LocationRepository;
