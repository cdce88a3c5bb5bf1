//! Portal creation flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use portal_auth::password::PasswordHasher;
use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_database::repositories::portal::PortalStore;
use portal_entity::portal::{CreatePortal, Portal};

use super::slug::{slugify, unique_slug};

/// Request to create a new portal.
#[derive(Debug, Clone)]
pub struct CreatePortalRequest {
    /// Client display name; the slug is derived from it.
    pub client_name: String,
    /// Client contact email.
    pub client_email: String,
    /// Plaintext portal password; hashed before storage.
    pub password: String,
    /// Object-store URL of the shared file.
    pub file_url: String,
    /// Expiry time (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

/// Creates portals: validate, hash, slugify, insert, and recover once
/// from a slug collision.
#[derive(Debug, Clone)]
pub struct PortalService {
    portals: Arc<dyn PortalStore>,
    hasher: Arc<PasswordHasher>,
    slug_max_attempts: u32,
}

impl PortalService {
    /// Creates a new portal service.
    pub fn new(
        portals: Arc<dyn PortalStore>,
        hasher: Arc<PasswordHasher>,
        slug_max_attempts: u32,
    ) -> Self {
        Self {
            portals,
            hasher,
            slug_max_attempts,
        }
    }

    /// Creates a new portal and returns the stored row.
    ///
    /// The bare slug is always attempted first; the suffixed search runs
    /// only after the repository reports a uniqueness conflict, and the
    /// insert is retried exactly once with the disambiguated slug.
    pub async fn create_portal(&self, req: CreatePortalRequest) -> AppResult<Portal> {
        if req.client_name.trim().is_empty()
            || req.client_email.trim().is_empty()
            || req.password.is_empty()
            || req.file_url.trim().is_empty()
        {
            return Err(AppError::validation("All fields are required"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let slug = slugify(&req.client_name);
        if slug.is_empty() {
            return Err(AppError::validation(
                "Client name must contain at least one alphanumeric character",
            ));
        }

        let mut data = CreatePortal {
            client_name: req.client_name.clone(),
            client_email: req.client_email,
            password_hash,
            file_url: req.file_url,
            slug,
            expires_at: req.expires_at,
        };

        let portal = match self.portals.create(&data).await {
            Ok(portal) => portal,
            Err(e) if e.kind == ErrorKind::Conflict => {
                data.slug =
                    unique_slug(&req.client_name, self.portals.as_ref(), self.slug_max_attempts)
                        .await?;
                self.portals.create(&data).await.map_err(|retry_err| {
                    if retry_err.kind == ErrorKind::Conflict {
                        AppError::internal(format!(
                            "Slug '{}' conflicted again after disambiguation",
                            data.slug
                        ))
                    } else {
                        retry_err
                    }
                })?
            }
            Err(e) => return Err(e),
        };

        info!(
            portal_id = %portal.id,
            slug = %portal.slug,
            "Portal created"
        );

        Ok(portal)
    }
}
