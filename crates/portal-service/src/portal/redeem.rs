//! Download redemption flow.

use std::sync::Arc;

use tracing::info;

use portal_auth::password::PasswordHasher;
use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_database::repositories::portal::PortalStore;
use portal_storage::resolver::StorageResolver;
use portal_storage::url::file_name_from_url;

/// Everything the client needs to download their file once.
#[derive(Debug, Clone)]
pub struct DownloadGrant {
    /// Client display name.
    pub client_name: String,
    /// Display file name derived from the stored URL.
    pub file_name: String,
    /// File size in bytes; 0 when metadata lookup fails.
    pub file_size: u64,
    /// Signed, time-limited download URL. Never the raw stored URL.
    pub file_url: String,
}

/// Redeems download links: look up, check expiry, verify the password,
/// and hand back a signed URL.
#[derive(Debug, Clone)]
pub struct RedemptionService {
    portals: Arc<dyn PortalStore>,
    hasher: Arc<PasswordHasher>,
    resolver: Arc<StorageResolver>,
}

impl RedemptionService {
    /// Creates a new redemption service.
    pub fn new(
        portals: Arc<dyn PortalStore>,
        hasher: Arc<PasswordHasher>,
        resolver: Arc<StorageResolver>,
    ) -> Self {
        Self {
            portals,
            hasher,
            resolver,
        }
    }

    /// Authenticates a client against a portal and returns a time-limited
    /// download grant.
    ///
    /// Expiry is checked before the password so an expired link never
    /// reveals whether the supplied password was correct. The raw stored
    /// URL is never returned; failure to sign fails the whole request.
    pub async fn redeem(&self, slug: &str, password: &str) -> AppResult<DownloadGrant> {
        let portal = self
            .portals
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid download link"))?;

        if portal.is_expired() {
            return Err(AppError::expired("This download link has expired"));
        }

        if !self.hasher.verify_password(password, &portal.password_hash) {
            return Err(AppError::unauthorized("Invalid password"));
        }

        let file_name = file_name_from_url(&portal.file_url);

        let signed_url = self
            .resolver
            .generate_signed_url(&portal.file_url, None)
            .await
            .ok_or_else(|| AppError::internal("Failed to generate download link"))?;

        // Metadata is best-effort; a missing size degrades to 0.
        let file_size = self
            .resolver
            .file_metadata(&portal.file_url)
            .await
            .map(|metadata| metadata.size)
            .unwrap_or(0);

        info!(slug = %portal.slug, file_name = %file_name, "Download link redeemed");

        Ok(DownloadGrant {
            client_name: portal.client_name,
            file_name,
            file_size,
            file_url: signed_url,
        })
    }
}
