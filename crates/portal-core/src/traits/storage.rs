//! Object-store trait for the signed-URL storage backend.

use async_trait::async_trait;

use crate::result::AppResult;

/// Per-object metadata as reported by the store, if any.
///
/// Supabase Storage omits the `metadata` block for folder placeholders
/// and may omit individual fields, so everything here is optional.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ObjectMetadata {
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// MIME type.
    #[serde(default)]
    pub mimetype: Option<String>,
}

/// One entry of a folder listing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObjectEntry {
    /// Object name (final path segment, not the full path).
    pub name: String,
    /// Metadata block, absent for folder entries.
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

/// Trait for the object-store backend holding the shared files.
///
/// The trait is defined here in `portal-core` and implemented in
/// `portal-storage` against the Supabase Storage REST API. The flows
/// depend on the trait only, so tests can substitute in-memory fakes.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Request a time-limited signed download URL for an object.
    ///
    /// Returns the absolute URL, valid for `expires_in_secs` seconds.
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in_secs: u64,
    ) -> AppResult<String>;

    /// List the entries of a folder within a bucket.
    ///
    /// `prefix` is the folder path; an empty prefix lists the bucket root.
    async fn list(&self, bucket: &str, prefix: &str) -> AppResult<Vec<ObjectEntry>>;
}
