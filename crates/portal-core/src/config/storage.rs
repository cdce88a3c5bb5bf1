//! Object-store configuration.

use serde::{Deserialize, Serialize};

/// Supabase-compatible object-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the object-store endpoint
    /// (e.g. `https://project.supabase.co`).
    pub url: String,
    /// Service-role key with read/administrative privileges over the
    /// object store and portal table.
    pub service_role_key: String,
    /// Reduced-privilege key. Unused by the server-side flows; reserved
    /// for future client-side access.
    #[serde(default)]
    pub anon_key: String,
    /// Lifetime of issued signed download URLs, in seconds.
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl_seconds: u64,
    /// Maximum number of entries requested per folder listing.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

fn default_signed_url_ttl() -> u64 {
    3600
}

fn default_list_limit() -> u32 {
    1000
}
