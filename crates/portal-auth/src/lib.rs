//! # portal-auth
//!
//! Credential hashing for portal passwords.

pub mod password;

pub use password::hasher::PasswordHasher;
