//! Supabase Storage REST client.

use async_trait::async_trait;
use serde::Deserialize;

use portal_core::config::storage::StorageConfig;
use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_core::traits::storage::{ObjectEntry, ObjectStore};

/// Object-store client backed by the Supabase Storage REST API.
///
/// Authenticates every call with the service-role key.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    service_role_key: String,
    list_limit: u32,
}

/// Response body of the sign endpoint. The returned URL is relative to
/// `<base>/storage/v1`.
#[derive(Debug, Deserialize)]
struct SignResponse {
    #[serde(rename = "signedURL", alias = "signedUrl")]
    signed_url: String,
}

impl SupabaseStore {
    /// Create a new store client from configuration.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            service_role_key: config.service_role_key.clone(),
            list_limit: config.list_limit,
        }
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.service_role_key)
            .header("apikey", &self.service_role_key)
    }
}

#[async_trait]
impl ObjectStore for SupabaseStore {
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in_secs: u64,
    ) -> AppResult<String> {
        let endpoint = format!("{}/storage/v1/object/sign/{bucket}/{path}", self.base_url);

        let response = self
            .authed(self.client.post(&endpoint))
            .json(&serde_json::json!({ "expiresIn": expires_in_secs }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Sign request failed", e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "Sign request for '{bucket}/{path}' returned {}",
                response.status()
            )));
        }

        let body: SignResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Malformed sign response", e)
        })?;

        // The API returns a path relative to /storage/v1.
        if body.signed_url.starts_with('/') {
            Ok(format!("{}/storage/v1{}", self.base_url, body.signed_url))
        } else {
            Ok(format!("{}/storage/v1/{}", self.base_url, body.signed_url))
        }
    }

    async fn list(&self, bucket: &str, prefix: &str) -> AppResult<Vec<ObjectEntry>> {
        let endpoint = format!("{}/storage/v1/object/list/{bucket}", self.base_url);

        let response = self
            .authed(self.client.post(&endpoint))
            .json(&serde_json::json!({ "prefix": prefix, "limit": self.list_limit }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "List request failed", e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::storage(format!(
                "List request for '{bucket}/{prefix}' returned {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Malformed list response", e)
        })
    }
}
