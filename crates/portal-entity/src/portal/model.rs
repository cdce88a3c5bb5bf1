//! Portal entity model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One password-protected download portal, bound to a single client and
/// a single stored file.
///
/// Rows are immutable after insert: the lifecycle is create once, read
/// many times, and (implicitly) expire.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Portal {
    /// Unique portal identifier.
    pub id: Uuid,
    /// Client display name the slug is derived from.
    pub client_name: String,
    /// Client contact email.
    pub client_email: String,
    /// Argon2id hash of the portal password. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Object-store URL of the shared file.
    pub file_url: String,
    /// Globally unique, URL-safe identifier.
    pub slug: String,
    /// When the portal was created.
    pub created_at: DateTime<Utc>,
    /// When the portal stops being redeemable (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

impl Portal {
    /// Check whether the portal's validity window has passed.
    pub fn is_expired(&self) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at <= Utc::now())
    }
}

/// Data required to insert a new portal row.
#[derive(Debug, Clone)]
pub struct CreatePortal {
    /// Client display name.
    pub client_name: String,
    /// Client contact email.
    pub client_email: String,
    /// Hashed portal password.
    pub password_hash: String,
    /// Object-store URL of the shared file.
    pub file_url: String,
    /// Candidate slug; the database unique constraint is the arbiter.
    pub slug: String,
    /// Expiry time (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}
