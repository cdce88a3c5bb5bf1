//! Storage URL resolution against the object store.
//!
//! Resolution failures are deliberately soft: both operations report
//! `None` rather than an error, and the caller decides whether that is
//! fatal (signed URL) or degradable (metadata).

use std::sync::Arc;

use portal_core::traits::storage::ObjectStore;

use crate::url::parse_storage_url;

/// Size and MIME type of a stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size in bytes (0 when the store reports no size).
    pub size: u64,
    /// MIME type, if the store reports one.
    pub mime_type: Option<String>,
}

/// Resolves stored file URLs into signed download URLs and metadata.
#[derive(Debug, Clone)]
pub struct StorageResolver {
    store: Arc<dyn ObjectStore>,
    signed_url_ttl_seconds: u64,
}

impl StorageResolver {
    /// Create a new resolver over an object store.
    pub fn new(store: Arc<dyn ObjectStore>, signed_url_ttl_seconds: u64) -> Self {
        Self {
            store,
            signed_url_ttl_seconds,
        }
    }

    /// Generate a time-limited signed URL for a stored file reference.
    ///
    /// `expires_in_secs` overrides the configured TTL. Returns `None` on
    /// any resolution or backend failure; callers must treat that as
    /// "could not produce a secure link" and fail their request.
    pub async fn generate_signed_url(
        &self,
        file_url: &str,
        expires_in_secs: Option<u64>,
    ) -> Option<String> {
        let Some(location) = parse_storage_url(file_url) else {
            tracing::error!(file_url, "Failed to parse storage URL");
            return None;
        };

        let expires_in = expires_in_secs.unwrap_or(self.signed_url_ttl_seconds);
        match self
            .store
            .create_signed_url(&location.bucket, &location.path, expires_in)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(
                    bucket = %location.bucket,
                    path = %location.path,
                    error = %e,
                    "Error creating signed URL"
                );
                None
            }
        }
    }

    /// Fetch size and MIME type for a stored file reference.
    ///
    /// Lists the containing folder and scans for the final path segment.
    /// Returns `None` if the URL can't be parsed, the listing fails, or
    /// no matching entry is found. Absent metadata fields soft-default to
    /// size 0 and no MIME type.
    pub async fn file_metadata(&self, file_url: &str) -> Option<FileMetadata> {
        let location = parse_storage_url(file_url)?;

        let (folder, file_name) = match location.path.rsplit_once('/') {
            Some((folder, name)) => (folder, name),
            None => ("", location.path.as_str()),
        };

        let entries = match self.store.list(&location.bucket, folder).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(
                    bucket = %location.bucket,
                    folder,
                    error = %e,
                    "Error listing files"
                );
                return None;
            }
        };

        let entry = entries.into_iter().find(|entry| entry.name == file_name)?;
        let metadata = entry.metadata.unwrap_or_default();

        Some(FileMetadata {
            size: metadata.size.unwrap_or(0),
            mime_type: metadata.mimetype,
        })
    }
}
