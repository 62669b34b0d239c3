//! Data models for campusq
//!
//! Core abstractions:
//! - Item: a submitted application or complaint awaiting triage
//! - Priority: the closed set of declared priority levels
//! - Status: the item lifecycle (pending until a reviewer decides)

pub mod item;

pub use item::{Item, Kind, Priority, Status};
