//! File-backed persistence for the inventory service.
//! - `storage` holds the generic JSON-array collection.
//! - `file` instantiates it per entity and groups the three as a `RecordStore`.
//! - `repository` defines the trait seams used by the HTTP layer.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod file;
pub mod repository;

pub use file::record_store::{RecordStore, StoreConfig};
