//! Repository implementations.

pub mod portal;
