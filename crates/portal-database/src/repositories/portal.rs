//! Portal repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_entity::portal::{CreatePortal, Portal};

/// Persistence operations for portal rows, keyed by slug.
///
/// Implemented over PostgreSQL by [`PortalRepository`]; the creation and
/// redemption flows depend on this trait only, so tests can substitute an
/// in-memory store.
#[async_trait]
pub trait PortalStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new portal row.
    ///
    /// A unique-constraint violation on `slug` is reported as
    /// [`ErrorKind::Conflict`] so the caller can retry with a
    /// disambiguated candidate; all other failures are
    /// [`ErrorKind::Database`].
    async fn create(&self, data: &CreatePortal) -> AppResult<Portal>;

    /// Find a portal by slug. Returns `Ok(None)` on absence, never an
    /// error.
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Portal>>;
}

/// Repository for portal rows.
#[derive(Debug, Clone)]
pub struct PortalRepository {
    pool: PgPool,
}

impl PortalRepository {
    /// Create a new portal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortalStore for PortalRepository {
    async fn create(&self, data: &CreatePortal) -> AppResult<Portal> {
        sqlx::query_as::<_, Portal>(
            "INSERT INTO client_portals \
             (client_name, client_email, password_hash, file_url, slug, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.client_name)
        .bind(&data.client_email)
        .bind(&data.password_hash)
        .bind(&data.file_url)
        .bind(&data.slug)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(format!("Slug '{}' already exists", data.slug));
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to create portal", e)
        })
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Portal>> {
        sqlx::query_as::<_, Portal>("SELECT * FROM client_portals WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find portal by slug", e)
            })
    }
}
