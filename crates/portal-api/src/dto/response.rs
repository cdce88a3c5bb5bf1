//! Response DTOs.

use serde::Serialize;

/// Portal creation response body.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePortalResponse {
    /// Slug of the created portal.
    pub slug: String,
}

/// Successful download redemption response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    /// Client display name.
    pub client_name: String,
    /// Display file name.
    pub file_name: String,
    /// File size in bytes (0 when metadata lookup failed).
    pub file_size: u64,
    /// Signed, time-limited download URL.
    pub file_url: String,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}
