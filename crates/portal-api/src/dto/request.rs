//! Request DTOs with validation.
//!
//! Fields default to empty strings so a missing field surfaces as a 400
//! validation error rather than a deserialization rejection.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Portal creation request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortalRequest {
    /// Client display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "clientName is required"))]
    pub client_name: String,
    /// Client contact email.
    #[serde(default)]
    #[validate(length(min = 1, message = "clientEmail is required"))]
    pub client_email: String,
    /// Plaintext portal password.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Object-store URL of the shared file.
    #[serde(default)]
    #[validate(length(min = 1, message = "fileUrl is required"))]
    pub file_url: String,
    /// Optional expiry time.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Download redemption request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RedeemRequest {
    /// Portal password supplied by the client.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
