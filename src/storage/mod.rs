//! Storage for campusq
//!
//! Items live in a single `.campusq.toml` file in the queue directory,
//! alongside the `[queue]` configuration.

pub mod item;

pub use item::{ItemEntry, ItemStore, StoreError, STORE_FILE};
