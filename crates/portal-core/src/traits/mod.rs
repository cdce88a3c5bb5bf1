//! Core trait definitions.

pub mod storage;

pub use storage::{ObjectEntry, ObjectMetadata, ObjectStore};
