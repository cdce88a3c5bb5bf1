//! # portal-storage
//!
//! Storage URL parsing and the Supabase-compatible object-store client.
//! Issues short-lived signed download URLs and best-effort file metadata.

pub mod resolver;
pub mod supabase;
pub mod url;

pub use resolver::{FileMetadata, StorageResolver};
pub use supabase::SupabaseStore;
pub use url::{StorageLocation, file_name_from_url, parse_storage_url};
