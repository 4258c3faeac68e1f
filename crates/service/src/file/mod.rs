pub mod category_store;
pub mod location_store;
pub mod item_store;
pub mod record_store;
