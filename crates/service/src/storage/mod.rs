//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed collection store shared by the
//! category, location and item stores.

pub mod json_array_store;
