//! # portal-entity
//!
//! Entity models for ClientPortal rows.

pub mod portal;

pub use portal::{CreatePortal, Portal};
